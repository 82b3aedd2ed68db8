//! Extraction statistics
//!
//! Counters describing one extraction run, used for logging and the CLI
//! inspection report.

use serde::{Deserialize, Serialize};

/// Simple extraction statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of cycles in the container
    pub cycles_total: usize,

    /// Cycles skipped because they carried no data payload
    pub cycles_skipped: usize,

    /// Measurement rows emitted
    pub rows_emitted: usize,

    /// Distinct channel fields discovered across all entries
    pub fields_discovered: usize,
}

impl ExtractionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            cycles_total: 0,
            cycles_skipped: 0,
            rows_emitted: 0,
            fields_discovered: 0,
        }
    }

    /// Cycles that contributed at least one row
    pub fn cycles_with_data(&self) -> usize {
        self.cycles_total.saturating_sub(self.cycles_skipped)
    }

    /// Fraction of cycles carrying data, as a percentage
    pub fn coverage_rate(&self) -> f64 {
        if self.cycles_total == 0 {
            0.0
        } else {
            (self.cycles_with_data() as f64 / self.cycles_total as f64) * 100.0
        }
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}
