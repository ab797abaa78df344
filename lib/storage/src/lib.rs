//! # charmerge Storage
//!
//! File collaborators around the merge core: [`load_catalog`] reads a JSON
//! catalog into memory, [`write_catalog`] writes the merged result back.

pub mod error;
pub mod loader;
pub mod writer;

pub use error::{Result, StorageError};
pub use loader::load_catalog;
pub use writer::{write_catalog, write_json, write_report};
