//! Normalization pipeline orchestration
//!
//! The [`TableNormalizer`] runs the full repair → flatten → backfill →
//! clip → scale pipeline over an extracted record table and reports what
//! it did through [`NormalizeStats`].

use tracing::{debug, info};

use super::flatten::flatten_sequences;
use super::outliers::clip_column;
use super::repair::repair_columns;
use super::scaling::min_max_scale;
use super::stats::NormalizeStats;
use crate::app::models::{FeatureData, FeatureTable, RecordTable};

/// Normalization result: the feature table and per-stage statistics
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    pub table: FeatureTable,
    pub stats: NormalizeStats,
}

/// Table normalizer for extracted battery measurement records.
///
/// Stateless across invocations: the scaler is fit on each batch being
/// cleaned and discarded with it, so normalized features are relative to
/// their own container and not comparable across uploads.
#[derive(Debug, Default)]
pub struct TableNormalizer;

impl TableNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Run the complete normalization pipeline over a record table.
    ///
    /// Degrades values (coercion, filling, clipping) rather than rejecting
    /// rows; an empty input yields an empty output table. After this call
    /// every numeric column has no missing values, lies within its IQR
    /// bounds, and is min-max scaled to [0,1].
    pub fn normalize(&self, table: &RecordTable) -> NormalizeResult {
        let mut stats = NormalizeStats::new();
        stats.rows = table.row_count();
        stats.columns_in = table.column_count();

        info!(
            "Normalizing table: {} rows, {} columns",
            stats.rows, stats.columns_in
        );

        // Stage 1: per-column repair and tagging
        let repaired = repair_columns(table, &mut stats);

        // Stage 2: sequence-column flattening
        let mut columns = flatten_sequences(repaired, &mut stats);

        // Stage 3: backfill remaining gaps with the column mean
        for column in &mut columns {
            if let FeatureData::Numeric(values) = &mut column.data {
                backfill_mean(&column.name, values, &mut stats);
            }
        }

        // Stages 4 and 5: outlier clipping, then batch-relative scaling
        for column in &mut columns {
            if let FeatureData::Numeric(values) = &mut column.data {
                clip_column(values, &mut stats);
                min_max_scale(values);
            }
        }

        for column in &columns {
            match column.data {
                FeatureData::Numeric(_) => stats.numeric_columns += 1,
                FeatureData::Text(_) => stats.text_columns += 1,
            }
        }
        stats.columns_out = columns.len();

        info!("Normalization complete: {}", stats.summary());

        NormalizeResult {
            table: FeatureTable { columns },
            stats,
        }
    }
}

/// Replace NaN cells with the column mean over its finite values; a column
/// with no finite values at all becomes 0.0 so the no-missing invariant
/// holds unconditionally.
fn backfill_mean(name: &str, values: &mut [f64], stats: &mut NormalizeStats) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let fill = if finite.is_empty() {
        debug!("Column '{}' has no finite values, filling with 0.0", name);
        0.0
    } else {
        finite.iter().sum::<f64>() / finite.len() as f64
    };

    for value in values.iter_mut() {
        if !value.is_finite() {
            *value = fill;
            stats.cells_backfilled += 1;
        }
    }
}
