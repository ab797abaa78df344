//! # charmerge Core
//!
//! Core library for charmerge.
//!
//! Reconciles two character catalogs keyed by name: an image-bearing
//! catalog and a detailed catalog. The detailed records are enriched with
//! the image references of their counterpart.
//!
//! - [`normalize`] - name -> [`NormalizedKey`] (case, `,`, `.` and whitespace insensitive)
//! - [`ImageIndex`] - normalized name -> image references, first occurrence wins
//! - [`join`] - order-preserving left outer join of detailed records onto the index
//! - [`Merger`] - index + join + [`MergeReport`]
//!
//! The core performs no I/O. Anomalies never abort a merge; they are
//! returned as [`MergeWarning`] values.
//!
//! ## Example
//!
//! ```rust
//! use charmerge_core::{Merger, MergeConfig};
//! use serde_json::json;
//!
//! let images = vec![
//!     json!({"name": "Monkey D., Luffy", "images": {"jpg": "a.jpg"}}),
//!     json!({"name": "Roronoa Zoro", "images": {"jpg": "z.jpg"}}),
//! ];
//! let details = vec![
//!     json!({"id": 1, "name": "Monkey D Luffy"}),
//!     json!({"id": 2, "name": "Roronoa Zoro"}),
//!     json!({"id": 3, "name": "Nami"}),
//! ];
//!
//! let merger = Merger::new(MergeConfig::default()).unwrap();
//! let outcome = merger.merge(&images, &details);
//!
//! assert_eq!(outcome.records[0]["images"], json!({"jpg": "a.jpg"}));
//! assert!(outcome.records[2].get("images").is_none());
//! assert_eq!(outcome.report.matched, 2);
//! assert_eq!(outcome.report.unmatched, 1);
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod join;
pub mod merger;
pub mod normalize;
pub mod record;
pub mod report;
pub mod warning;

pub use config::{MergeConfig, UnmatchedPolicy};
pub use error::{Error, Result};
pub use index::ImageIndex;
pub use join::{join, JoinOutcome};
pub use merger::{MergeOutcome, Merger};
pub use normalize::{normalize, normalize_opt, NormalizedKey};
pub use record::{ImageRecord, RecordDefect};
pub use report::MergeReport;
pub use warning::{MergeWarning, SourceKind};
