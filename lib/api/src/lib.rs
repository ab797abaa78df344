//! # charmerge API
//!
//! Serves a merged catalog read-only over HTTP, with permissive CORS so a
//! browser front end on any origin can fetch it.

pub mod rest;

pub use rest::{configure, cors, RestApi, CATALOG_PATHS};
