//! Merger: index the image catalog, then join the detailed catalog onto it.

use crate::{join, ImageIndex, MergeConfig, MergeReport, MergeWarning, Result};
use serde_json::Value;

/// Everything one merge produces
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Enriched detailed records, same length and order as the input
    pub records: Vec<Value>,
    pub report: MergeReport,
    /// Index-phase warnings first, then join-phase warnings
    pub warnings: Vec<MergeWarning>,
}

/// Stateless merge driver.
///
/// Holds only its configuration, so one `Merger` can serve any number of
/// independent merges, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Enrich `details` with image references from `images`
    pub fn merge(&self, images: &[Value], details: &[Value]) -> MergeOutcome {
        let (index, mut warnings) = ImageIndex::build(images, &self.config);
        let joined = join(details, &index, &self.config);

        let report = MergeReport {
            duplicate_keys: index.duplicate_count(),
            skipped_malformed: index.skipped_count() + joined.report.skipped_malformed,
            skipped_malformed_images: index.skipped_count(),
            image_records: images.len(),
            indexed: index.len(),
            ..joined.report
        };
        warnings.extend(joined.warnings);

        MergeOutcome {
            records: joined.records,
            report,
            warnings,
        }
    }
}
