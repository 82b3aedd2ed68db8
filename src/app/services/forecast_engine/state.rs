//! Rolling forecast state
//!
//! The forecast pass advances a mutable buffer one step at a time: row
//! models keep a bounded row buffer whose tail is the next model input,
//! sequence models keep a full window that slides by one row per step.
//! A state value is owned by exactly one forecast call and discarded when
//! the call returns.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};
use std::collections::VecDeque;

/// Bounded row buffer for row-model forecasting.
///
/// Seeded with the trailing rows of the feature matrix; grows until it
/// reaches `capacity` rows, then slides by dropping the oldest row per push.
#[derive(Debug, Clone)]
pub struct RollingRows {
    rows: VecDeque<Array1<f64>>,
    capacity: usize,
}

impl RollingRows {
    /// Seed the buffer with the last `capacity` matrix rows (or all rows
    /// when fewer exist).
    pub fn seed(matrix: &Array2<f64>, capacity: usize) -> Self {
        let n = matrix.nrows();
        let start = n.saturating_sub(capacity);
        let rows = (start..n).map(|i| matrix.row(i).to_owned()).collect();
        Self { rows, capacity }
    }

    /// The most recent row, the next model input
    pub fn last(&self) -> &Array1<f64> {
        self.rows.back().expect("rolling buffer is never empty")
    }

    /// Append a synthesized row, sliding once the capacity is reached
    pub fn push(&mut self, row: Array1<f64>) {
        if self.rows.len() >= self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(row);
    }

    /// Current buffer length
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the buffer holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sliding window for sequence-model forecasting.
///
/// Holds exactly `window_size` rows; each slide drops the oldest row and
/// appends one synthesized row at the tail.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    window: Array2<f64>,
}

impl RollingWindow {
    /// Seed the window with the final `window_size` rows of the matrix.
    /// The caller must have verified the matrix holds at least that many.
    pub fn seed(matrix: &Array2<f64>, window_size: usize) -> Self {
        let n = matrix.nrows();
        let window = matrix.slice(s![n - window_size.., ..]).to_owned();
        Self { window }
    }

    /// The current window, the next model input
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.window.view()
    }

    /// The newest row in the window
    pub fn last_row(&self) -> ArrayView1<'_, f64> {
        self.window.row(self.window.nrows() - 1)
    }

    /// Slide by one step: drop the oldest row, append the synthesized row
    pub fn slide(&mut self, new_row: Array1<f64>) {
        let size = self.window.nrows();
        for i in 0..size - 1 {
            let next = self.window.row(i + 1).to_owned();
            self.window.row_mut(i).assign(&next);
        }
        self.window.row_mut(size - 1).assign(&new_row);
    }
}
