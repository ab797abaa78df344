//! End-to-end merge: load both catalogs, merge, write the result.

use anyhow::{Context, Result};
use charmerge_core::{MergeConfig, MergeReport, MergeWarning, Merger};
use charmerge_storage::{load_catalog, write_catalog, write_report};
use std::path::PathBuf;
use tracing::{info, warn};

/// Where a merge reads from and writes to
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Image-bearing catalog (e.g. a Jikan character dump)
    pub images_path: PathBuf,
    /// Detailed catalog to enrich
    pub details_path: PathBuf,
    pub output_path: PathBuf,
    /// Optional JSON copy of the merge report
    pub report_path: Option<PathBuf>,
    pub merge: MergeConfig,
}

/// Run one merge and return its report.
///
/// Fails only when a catalog cannot be loaded or the output cannot be
/// written; record-level anomalies are logged and counted.
pub fn run(config: &PipelineConfig) -> Result<MergeReport> {
    let merger = Merger::new(config.merge.clone())?;

    let images = load_catalog(&config.images_path)
        .with_context(|| format!("Loading image catalog {:?}", config.images_path))?;
    info!("Loaded {} image records from {:?}", images.len(), config.images_path);

    let details = load_catalog(&config.details_path)
        .with_context(|| format!("Loading detailed catalog {:?}", config.details_path))?;
    info!("Loaded {} detailed records from {:?}", details.len(), config.details_path);

    let outcome = merger.merge(&images, &details);
    log_warnings(&outcome.warnings);
    log_report(&outcome.report);

    write_catalog(&config.output_path, &outcome.records)
        .with_context(|| format!("Writing merged catalog {:?}", config.output_path))?;
    info!("Merged catalog saved to {:?}", config.output_path);

    if let Some(report_path) = &config.report_path {
        write_report(report_path, &outcome.report)
            .with_context(|| format!("Writing merge report {:?}", report_path))?;
        info!("Merge report saved to {:?}", report_path);
    }

    Ok(outcome.report)
}

pub fn log_warnings(warnings: &[MergeWarning]) {
    for warning in warnings {
        warn!("{}", warning);
    }
}

pub fn log_report(report: &MergeReport) {
    info!("{} characters indexed from {} image records", report.indexed, report.image_records);
    info!("Detailed records: {}", report.total);
    info!("Matched: {}", report.matched);
    info!("Unmatched: {}", report.unmatched);
    if report.duplicate_keys > 0 {
        info!("Duplicate image names dropped: {}", report.duplicate_keys);
    }
    if report.skipped_malformed > 0 {
        info!(
            "Malformed records skipped: {} (images: {}, details: {})",
            report.skipped_malformed, report.skipped_malformed_images, report.skipped_malformed_details
        );
    }
}
