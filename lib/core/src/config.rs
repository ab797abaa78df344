//! Merge configuration
//!
//! Names the JSON fields the merge reads and writes, and what an unmatched
//! record looks like in the output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Field holding the name in both catalogs.
pub const DEFAULT_NAME_FIELD: &str = "name";
/// Field holding the image references in the image catalog.
pub const DEFAULT_IMAGE_FIELD: &str = "images";
/// Field added to enriched records.
pub const DEFAULT_OUTPUT_FIELD: &str = "images";
/// Jikan wraps each character in `{"character": {...}}`.
pub const DEFAULT_ENVELOPE_FIELD: &str = "character";

/// What to do with the output field when a detailed record has no match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Leave the record without the output field
    #[default]
    Omit,
    /// Set the output field to `null`
    Null,
}

/// Configuration for a single merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    #[serde(default = "default_name_field")]
    pub name_field: String,
    #[serde(default = "default_image_field")]
    pub image_field: String,
    #[serde(default = "default_output_field")]
    pub output_field: String,
    /// Envelope key unwrapped from image records before reading their fields.
    /// `None` disables unwrapping.
    #[serde(default = "default_envelope_field")]
    pub envelope_field: Option<String>,
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
}

fn default_name_field() -> String {
    DEFAULT_NAME_FIELD.to_string()
}

fn default_image_field() -> String {
    DEFAULT_IMAGE_FIELD.to_string()
}

fn default_output_field() -> String {
    DEFAULT_OUTPUT_FIELD.to_string()
}

fn default_envelope_field() -> Option<String> {
    Some(DEFAULT_ENVELOPE_FIELD.to_string())
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            name_field: default_name_field(),
            image_field: default_image_field(),
            output_field: default_output_field(),
            envelope_field: default_envelope_field(),
            unmatched: UnmatchedPolicy::Omit,
        }
    }
}

impl MergeConfig {
    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// Reject empty field names
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name_field", self.name_field.as_str()),
            ("image_field", self.image_field.as_str()),
            ("output_field", self.output_field.as_str()),
        ];
        for (label, value) in fields {
            if value.is_empty() {
                return Err(Error::InvalidConfig(format!("{} cannot be empty", label)));
            }
        }
        if matches!(self.envelope_field.as_deref(), Some("")) {
            return Err(Error::InvalidConfig("envelope_field cannot be empty".to_string()));
        }
        Ok(())
    }
}
