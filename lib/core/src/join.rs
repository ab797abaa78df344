//! Order-preserving left outer join of detailed records onto the image index.

use crate::record::{name_of, RecordDefect};
use crate::{normalize_opt, ImageIndex, MergeConfig, MergeReport, MergeWarning, SourceKind, UnmatchedPolicy};
use serde_json::Value;

/// Result of joining the detailed catalog onto an index
#[derive(Debug, Clone, Default)]
pub struct JoinOutcome {
    /// One record per input record, in input order
    pub records: Vec<Value>,
    /// Join-phase counters; index-phase fields are left at zero
    pub report: MergeReport,
    pub warnings: Vec<MergeWarning>,
}

/// Join `records` onto `index`.
///
/// Each output record is a copy of its input; the caller's records are not
/// touched. Matched records gain the output field, unmatched records follow
/// [`UnmatchedPolicy`], malformed records are copied as-is.
pub fn join(records: &[Value], index: &ImageIndex, config: &MergeConfig) -> JoinOutcome {
    let mut outcome = JoinOutcome {
        records: Vec::with_capacity(records.len()),
        report: MergeReport {
            total: records.len(),
            ..MergeReport::default()
        },
        warnings: Vec::new(),
    };

    for (position, value) in records.iter().enumerate() {
        let Some(object) = value.as_object() else {
            outcome.skip_malformed(value, position, RecordDefect::NotAnObject);
            continue;
        };
        let name = match name_of(object, &config.name_field) {
            Ok(name) => name,
            Err(defect) => {
                outcome.skip_malformed(value, position, defect);
                continue;
            }
        };

        let key = normalize_opt(name);
        let mut enriched = object.clone();
        match index.get(key.as_str()) {
            Some(images) => {
                enriched.insert(config.output_field.clone(), images.clone());
                outcome.report.matched += 1;
            }
            None => {
                if config.unmatched == UnmatchedPolicy::Null {
                    enriched.insert(config.output_field.clone(), Value::Null);
                }
                outcome.report.unmatched += 1;
                outcome.warnings.push(MergeWarning::Unmatched {
                    name: name.unwrap_or_default().to_string(),
                    key,
                    position,
                });
            }
        }
        outcome.records.push(Value::Object(enriched));
    }

    outcome
}

impl JoinOutcome {
    fn skip_malformed(&mut self, value: &Value, position: usize, defect: RecordDefect) {
        self.records.push(value.clone());
        self.report.skipped_malformed += 1;
        self.report.skipped_malformed_details += 1;
        self.warnings.push(MergeWarning::MalformedRecord {
            catalog: SourceKind::Details,
            position,
            reason: defect.to_string(),
        });
    }
}
