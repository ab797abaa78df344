//! Merge statistics

use serde::{Deserialize, Serialize};

/// Summary of one merge
///
/// `matched + unmatched + skipped_malformed_details == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Detailed records seen (and emitted)
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Image records dropped because their key was already indexed
    pub duplicate_keys: usize,
    /// Malformed records across both catalogs
    pub skipped_malformed: usize,
    /// Malformed image records (not indexed)
    pub skipped_malformed_images: usize,
    /// Malformed detailed records (passed through unmatched)
    pub skipped_malformed_details: usize,
    /// Image records seen
    pub image_records: usize,
    /// Distinct keys in the image index
    pub indexed: usize,
}

impl MergeReport {
    /// Fraction of detailed records that received images, 0.0 when empty
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched == self.total
    }
}
