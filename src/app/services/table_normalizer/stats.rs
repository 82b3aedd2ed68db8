//! Normalization statistics
//!
//! Counters describing what one normalization run did to the table, used
//! for logging and the CLI inspection report.

use serde::{Deserialize, Serialize};

/// Statistics for one normalization run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeStats {
    /// Rows in the input table (invariant through the pipeline)
    pub rows: usize,

    /// Columns in the input table
    pub columns_in: usize,

    /// Columns in the normalized table
    pub columns_out: usize,

    /// Numeric columns in the normalized table
    pub numeric_columns: usize,

    /// Text columns passed through unchanged
    pub text_columns: usize,

    /// Sequence-valued columns replaced by derived statistics
    pub sequence_columns_flattened: usize,

    /// Non-numeric cells coerced to missing in numeric columns
    pub cells_coerced: usize,

    /// Missing numeric cells filled by interpolation or boundary fill
    pub cells_interpolated: usize,

    /// Missing numeric cells filled with the column mean (or zero when a
    /// column had no finite values at all)
    pub cells_backfilled: usize,

    /// Cells clipped into the IQR bounds
    pub cells_clipped: usize,

    /// Sequence elements dropped as unrepresentable
    pub elements_dropped: usize,

    /// Object cells degraded because their shape disagreed with the
    /// column's tag
    pub cells_shape_degraded: usize,
}

impl NormalizeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total cells repaired by any fill mechanism
    pub fn cells_repaired(&self) -> usize {
        self.cells_interpolated + self.cells_backfilled
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows, {} -> {} columns ({} numeric, {} text, {} sequences flattened); \
             {} cells repaired, {} clipped",
            self.rows,
            self.columns_in,
            self.columns_out,
            self.numeric_columns,
            self.text_columns,
            self.sequence_columns_flattened,
            self.cells_repaired(),
            self.cells_clipped
        )
    }
}
