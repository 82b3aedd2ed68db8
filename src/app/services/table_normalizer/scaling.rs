//! Batch-relative min-max scaling
//!
//! Rescales each numeric column independently so its range becomes exactly
//! [0,1]. The scaler is fit on the batch being cleaned and never persisted:
//! scaled features are relative to their own batch and are not numerically
//! comparable across containers.

/// Scale one numeric column in place to [0,1].
///
/// A constant column (zero range) scales to 0.0.
pub fn min_max_scale(values: &mut [f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return;
    }

    let range = max - min;
    if range == 0.0 {
        for value in values.iter_mut() {
            *value = 0.0;
        }
        return;
    }

    for value in values.iter_mut() {
        *value = (*value - min) / range;
    }
}
