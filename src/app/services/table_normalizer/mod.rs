//! Table normalization pipeline for extracted measurement records
//!
//! This module turns the heterogeneous, partially-missing record table
//! produced by the cycle extractor into a fully numeric, missing-value-free,
//! outlier-bounded, [0,1]-scaled feature table.
//!
//! # Processing Pipeline
//!
//! 1. **Repair** ([`repair`]) - decide each column's tag once (numeric,
//!    sequence-valued, or text) and repair its cells: numeric coercion with
//!    linear interpolation and boundary fill, complex magnitudes, blank
//!    strings to empty sequences
//! 2. **Flatten** ([`flatten`]) - derive mean/max/min/std columns from each
//!    sequence-valued column and drop the original
//! 3. **Backfill** - replace remaining numeric gaps with the column mean
//! 4. **Clip** ([`outliers`]) - winsorize each numeric column into its
//!    IQR-derived bounds
//! 5. **Scale** ([`scaling`]) - batch-relative min-max scaling to [0,1]
//!
//! The pipeline degrades values rather than rejecting rows: row count is
//! invariant, and an empty input table normalizes to an empty output table.

pub mod flatten;
pub mod normalizer;
pub mod outliers;
pub mod repair;
pub mod scaling;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use normalizer::TableNormalizer;
pub use repair::{RepairedColumn, RepairedData};
pub use stats::NormalizeStats;
