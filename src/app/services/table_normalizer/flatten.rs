//! Sequence-column flattening
//!
//! Turns each variable-length sequence-valued column into four fixed-width
//! numeric feature columns (mean, max, min, population standard deviation)
//! and drops the original. Statistics over an empty sequence are NaN; the
//! backfill stage resolves them afterwards.

use tracing::debug;

use super::repair::{RepairedColumn, RepairedData};
use super::stats::NormalizeStats;
use crate::app::models::{FeatureColumn, FeatureData};
use crate::constants::sequence_stat_column;

/// Flatten sequence-valued columns into derived statistics columns.
///
/// Numeric and text columns pass through in place; the derived columns are
/// appended after them, four per source column in source order.
pub fn flatten_sequences(
    columns: Vec<RepairedColumn>,
    stats: &mut NormalizeStats,
) -> Vec<FeatureColumn> {
    let mut flat = Vec::with_capacity(columns.len());
    let mut sequence_columns = Vec::new();

    for column in columns {
        match column.data {
            RepairedData::Numeric(values) => flat.push(FeatureColumn {
                name: column.name,
                data: FeatureData::Numeric(values),
            }),
            RepairedData::Text(values) => flat.push(FeatureColumn {
                name: column.name,
                data: FeatureData::Text(values),
            }),
            RepairedData::Sequence(rows) => sequence_columns.push((column.name, rows)),
        }
    }

    for (name, rows) in sequence_columns {
        debug!("Flattening sequence column '{}' into statistics", name);
        stats.sequence_columns_flattened += 1;

        let mut means = Vec::with_capacity(rows.len());
        let mut maxes = Vec::with_capacity(rows.len());
        let mut mins = Vec::with_capacity(rows.len());
        let mut stds = Vec::with_capacity(rows.len());

        for seq in &rows {
            let summary = summarize(seq);
            means.push(summary.mean);
            maxes.push(summary.max);
            mins.push(summary.min);
            stds.push(summary.std);
        }

        flat.push(FeatureColumn {
            name: sequence_stat_column(&name, "_mean"),
            data: FeatureData::Numeric(means),
        });
        flat.push(FeatureColumn {
            name: sequence_stat_column(&name, "_max"),
            data: FeatureData::Numeric(maxes),
        });
        flat.push(FeatureColumn {
            name: sequence_stat_column(&name, "_min"),
            data: FeatureData::Numeric(mins),
        });
        flat.push(FeatureColumn {
            name: sequence_stat_column(&name, "_std"),
            data: FeatureData::Numeric(stds),
        });
    }

    flat
}

struct SequenceSummary {
    mean: f64,
    max: f64,
    min: f64,
    std: f64,
}

/// Mean, max, min and population standard deviation of one sequence;
/// all NaN when the sequence is empty.
fn summarize(seq: &[f64]) -> SequenceSummary {
    if seq.is_empty() {
        return SequenceSummary {
            mean: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
            std: f64::NAN,
        };
    }

    let n = seq.len() as f64;
    let mean = seq.iter().sum::<f64>() / n;
    let max = seq.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = seq.iter().cloned().fold(f64::INFINITY, f64::min);
    let variance = seq.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    SequenceSummary {
        mean,
        max,
        min,
        std: variance.sqrt(),
    }
}
