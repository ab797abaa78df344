//! Non-fatal anomalies recorded during a merge.
//!
//! None of these abort the merge; each one degrades to a report entry and
//! the merge continues with the next record.

use crate::NormalizedKey;
use serde::Serialize;
use std::fmt;

/// Which input catalog a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Image-bearing catalog
    Images,
    /// Detailed catalog
    Details,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Images => write!(f, "images"),
            SourceKind::Details => write!(f, "details"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MergeWarning {
    #[error("Malformed {catalog} record #{position} skipped: {reason}")]
    MalformedRecord {
        catalog: SourceKind,
        position: usize,
        reason: String,
    },

    #[error("Duplicate normalized name '{key}' for '{name}' (record #{position}), keeping first occurrence")]
    DuplicateKey {
        key: NormalizedKey,
        name: String,
        position: usize,
    },

    #[error("No image match for '{name}' (normalized: '{key}', record #{position})")]
    Unmatched {
        name: String,
        key: NormalizedKey,
        position: usize,
    },
}

impl MergeWarning {
    pub fn is_malformed(&self) -> bool {
        matches!(self, MergeWarning::MalformedRecord { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, MergeWarning::DuplicateKey { .. })
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, MergeWarning::Unmatched { .. })
    }
}
