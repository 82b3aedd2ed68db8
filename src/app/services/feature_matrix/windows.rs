//! Overlapping window slicing for sequence models
//!
//! A matrix of `n` rows yields `n - window_size` windows: window `i` covers
//! rows `i .. i + window_size`. The final full window (ending at the last
//! row) is not part of the in-sample set; it seeds the forecast state.

use ndarray::{Array2, ArrayView2, s};

use crate::{Error, Result};

/// Iterate the overlapping in-sample windows of a feature matrix.
///
/// Fails with [`Error::InvalidWindow`] when `window_size` is zero or
/// exceeds the available row count. A matrix with exactly `window_size`
/// rows yields no windows.
pub fn window_iter(
    matrix: &Array2<f64>,
    window_size: usize,
) -> Result<impl Iterator<Item = ArrayView2<'_, f64>>> {
    let rows = matrix.nrows();
    if window_size == 0 || window_size > rows {
        return Err(Error::invalid_window(window_size, rows));
    }

    let count = rows - window_size;
    Ok((0..count).map(move |i| matrix.slice(s![i..i + window_size, ..])))
}
