//! # charmerge
//!
//! Reconciles two character catalogs keyed by name. Detailed records are
//! enriched with the image references found in an image-bearing catalog
//! (such as a Jikan character dump), matching names after normalization
//! (`"Monkey D., Luffy"` matches `"Monkey D Luffy"`).
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! charmerge merge --images personagens_one_piece.json \
//!     --details personagens_detalhados.json \
//!     --output personagens_completos.json
//! charmerge serve --catalog personagens_completos.json --port 3000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use charmerge::prelude::*;
//! use serde_json::json;
//!
//! let images = vec![json!({"character": {"name": "Roronoa Zoro", "images": {"jpg": "z.jpg"}}})];
//! let details = vec![json!({"id": 2, "name": "Roronoa Zoro"})];
//!
//! let outcome = Merger::new(MergeConfig::default()).unwrap().merge(&images, &details);
//! assert_eq!(outcome.records[0]["images"]["jpg"], "z.jpg");
//! ```
//!
//! ## Crate Structure
//!
//! - `charmerge-core` - normalization, image index, join, merge report
//! - `charmerge-storage` - catalog loading and atomic JSON writing
//! - `charmerge-api` - read-only REST endpoint for a merged catalog

pub mod pipeline;

// Re-export core types
pub use charmerge_core::{
    join, normalize, normalize_opt,
    Error, ImageIndex, JoinOutcome, MergeConfig, MergeOutcome, MergeReport, MergeWarning,
    Merger, NormalizedKey, Result, SourceKind, UnmatchedPolicy,
};

// Re-export storage
pub use charmerge_storage::{load_catalog, write_catalog, write_report, StorageError};

// Re-export API
pub use charmerge_api::RestApi;

pub use pipeline::{run, PipelineConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        normalize, MergeConfig, MergeOutcome, MergeReport, MergeWarning, Merger,
        UnmatchedPolicy, PipelineConfig, RestApi,
    };
}
