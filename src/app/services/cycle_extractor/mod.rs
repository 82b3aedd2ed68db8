//! Record extraction from nested battery-cycle containers
//!
//! This module parses a self-describing container holding one battery entity
//! and flattens its per-cycle measurement payloads into an ordered sequence
//! of [`MeasurementRow`](crate::app::models::MeasurementRow) records.
//!
//! # Architecture
//!
//! - [`container`] - Container decoding into raw cycles and tagged channel values
//! - [`extractor`] - Schema discovery and row emission
//! - [`stats`] - Extraction statistics
//!
//! Extraction prefers silent degradation for data-quality issues: cycles
//! without a `data` payload are skipped and unrepresentable values collapse
//! to `Missing`. Only the structural absence of a battery entity is fatal.

pub mod container;
pub mod extractor;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use container::{BatteryContainer, DataEntry, RawCycle};
pub use extractor::{ExtractionResult, extract, extract_records};
pub use stats::ExtractionStats;
