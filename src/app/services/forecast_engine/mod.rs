//! Autoregressive SOC forecasting
//!
//! This module produces the two output series of one forecasting run: the
//! in-sample prediction series over the historical feature matrix, and the
//! multi-step-ahead forecast in which each step's own output is fed back
//! into the next step's input.
//!
//! # Architecture
//!
//! - [`engine`] - the [`ForecastEngine`] with the row-model and
//!   sequence-model variants behind one contract
//! - [`state`] - the mutable rolling forecast state (row buffer or window)
//!   owned by a single forecast call
//!
//! The engine is strict where the extraction side is lenient: missing
//! configuration or insufficient history is reported, never guessed.

pub mod engine;
pub mod state;

#[cfg(test)]
pub mod tests;

pub use engine::ForecastEngine;
pub use state::{RollingRows, RollingWindow};
