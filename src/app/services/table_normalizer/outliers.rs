//! IQR outlier clipping
//!
//! Winsorizes each numeric column into [Q1 − 1.5·IQR, Q3 + 1.5·IQR] using
//! linearly interpolated quartiles. Clipping bounds values without removing
//! rows and is a no-op on columns whose IQR is zero or undefined, which also
//! makes it idempotent: reapplying the clip to a clipped column changes
//! nothing.

use super::stats::NormalizeStats;
use crate::constants::{IQR_MULTIPLIER, LOWER_QUARTILE, UPPER_QUARTILE};

/// Clip one numeric column in place; returns the number of cells clipped.
pub fn clip_column(values: &mut [f64], stats: &mut NormalizeStats) -> usize {
    let q1 = quantile(values, LOWER_QUARTILE);
    let q3 = quantile(values, UPPER_QUARTILE);
    let iqr = q3 - q1;

    if !iqr.is_finite() || iqr == 0.0 {
        return 0;
    }

    let lower = q1 - IQR_MULTIPLIER * iqr;
    let upper = q3 + IQR_MULTIPLIER * iqr;

    let mut clipped = 0;
    for value in values.iter_mut() {
        if *value < lower {
            *value = lower;
            clipped += 1;
        } else if *value > upper {
            *value = upper;
            clipped += 1;
        }
    }

    stats.cells_clipped += clipped;
    clipped
}

/// Linearly interpolated quantile over the finite values of a column.
/// NaN when no finite values exist.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let frac = h - lo as f64;

    if lo + 1 < sorted.len() {
        sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac
    } else {
        sorted[lo]
    }
}
