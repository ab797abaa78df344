//! Image index: normalized name -> image references.

use crate::record::ImageRecord;
use crate::{normalize_opt, MergeConfig, MergeWarning, NormalizedKey, SourceKind};
use ahash::AHashMap;
use serde_json::Value;

/// Lookup index built from the image-bearing catalog.
///
/// Keys are unique; the first record seen for a key wins.
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    entries: AHashMap<NormalizedKey, Value>,
    duplicates: usize,
    skipped: usize,
}

impl ImageIndex {
    /// Build the index from raw image records.
    ///
    /// Malformed records are skipped and duplicate keys keep the first
    /// occurrence; both are reported in the returned warnings, in encounter
    /// order.
    pub fn build(records: &[Value], config: &MergeConfig) -> (Self, Vec<MergeWarning>) {
        let mut index = Self {
            entries: AHashMap::with_capacity(records.len()),
            duplicates: 0,
            skipped: 0,
        };
        let mut warnings = Vec::new();

        for (position, value) in records.iter().enumerate() {
            let record = match ImageRecord::from_value(value, config) {
                Ok(record) => record,
                Err(defect) => {
                    index.skipped += 1;
                    warnings.push(MergeWarning::MalformedRecord {
                        catalog: SourceKind::Images,
                        position,
                        reason: defect.to_string(),
                    });
                    continue;
                }
            };

            let key = normalize_opt(record.name);
            if index.entries.contains_key(&key) {
                index.duplicates += 1;
                warnings.push(MergeWarning::DuplicateKey {
                    key,
                    name: record.name.unwrap_or_default().to_string(),
                    position,
                });
            } else {
                index.entries.insert(key, record.image_refs.clone());
            }
        }

        (index, warnings)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records dropped because their key was already indexed
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Records dropped because they were malformed
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedKey, &Value)> + '_ {
        self.entries.iter()
    }
}
