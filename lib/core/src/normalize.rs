//! Name normalization for cross-catalog matching.
//!
//! The two catalogs spell the same character differently
//! (`"Monkey D., Luffy"` vs `"Monkey D Luffy"`). Case, commas, periods and
//! whitespace are the only divergences handled here.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical matching key derived from a display name.
///
/// Only ever used as a lookup key; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NormalizedKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a display name into its matching key.
///
/// Lowercases, drops `,` and `.`, then collapses whitespace runs into single
/// ASCII spaces with no leading or trailing space. Idempotent.
///
/// ```
/// use charmerge_core::normalize;
///
/// assert_eq!(normalize("Monkey D., Luffy"), normalize("  MONKEY   D  LUFFY "));
/// assert_eq!(normalize("Monkey D., Luffy").as_str(), "monkey d luffy");
/// ```
pub fn normalize(name: &str) -> NormalizedKey {
    let lowered = name.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    for segment in lowered
        .split(|c: char| c == ',' || c == '.')
        .collect::<String>()
        .split_whitespace()
    {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(segment);
    }
    NormalizedKey(key)
}

/// Like [`normalize`], mapping an absent name to the empty key.
pub fn normalize_opt(name: Option<&str>) -> NormalizedKey {
    name.map(normalize).unwrap_or_default()
}
