//! Fitted model registry
//!
//! This module holds the served set of already-fitted SOC models and the
//! registry that maps model names to capability-tagged entries. Models are
//! opaque predict-only collaborators: fitting happens elsewhere, and their
//! parameters are deserialized from JSON model files by the boundary layer
//! before the core runs.
//!
//! # Served model kinds
//!
//! Row models (one feature row in, one scalar out):
//! - [`linear`] - linear regression
//! - [`tree`] - decision tree, random forest, gradient boosting
//!
//! Sequence models (one window in, one scalar out):
//! - [`lstm`] - single-layer LSTM with a dense head
//!
//! The registry is an explicit value passed to the forecast engine at call
//! time; there is no process-wide model state.

pub mod linear;
pub mod lstm;
pub mod registry;
pub mod tree;

#[cfg(test)]
pub mod tests;

pub use linear::LinearRegressor;
pub use lstm::LstmRegressor;
pub use registry::{FittedModel, ModelCapability, ModelRegistry, ModelSpec, RowModel, SequenceModel};
pub use tree::{DecisionTreeRegressor, GradientBoostingRegressor, RandomForestRegressor};
