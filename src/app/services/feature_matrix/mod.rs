//! Feature projection and windowing utilities
//!
//! Pure, stateless operations between the normalized table and the models:
//! [`selection`] projects a feature table onto the fixed, ordered model
//! feature list, and [`windows`] slices the resulting matrix into
//! overlapping fixed-length windows for sequence models.

pub mod selection;
pub mod windows;

pub use selection::select_features;
pub use windows::window_iter;
