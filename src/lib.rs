//! SOC Forecaster Library
//!
//! A Rust library for normalizing irregular battery cycle measurement data
//! and forecasting state-of-charge (SOC) with already-fitted models.
//!
//! This library provides tools for:
//! - Parsing nested battery-cycle containers into flat measurement records
//! - Repairing, flattening, clipping and scaling records into a numeric
//!   feature table
//! - Projecting the table onto a fixed model feature set and windowing it
//!   for sequence models
//! - Producing in-sample predictions and multi-step autoregressive forecasts
//! - Loading fitted regression and sequence models from disk into an
//!   explicit, capability-tagged registry

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cycle_extractor;
        pub mod feature_matrix;
        pub mod forecast_engine;
        pub mod model_registry;
        pub mod table_normalizer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChannelValue, FeatureTable, MeasurementRow, SocForecast};
pub use config::ForecastConfig;

/// Result type alias for the SOC forecaster
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for SOC forecasting operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Container lacks the expected battery structure
    #[error("Malformed container: {message}")]
    MalformedInput {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A configured feature name is absent from the normalized table
    #[error("Unknown feature '{feature}' not present in the normalized table")]
    UnknownFeature { feature: String },

    /// Not enough rows of history for the requested model variant
    #[error("Insufficient history: {required} rows required, {available} available")]
    InsufficientHistory { required: usize, available: usize },

    /// Window size is non-positive or exceeds the available rows
    #[error("Invalid window size {window_size} for {row_count} rows")]
    InvalidWindow {
        window_size: usize,
        row_count: usize,
    },

    /// A requested model identifier is not present in the served set
    #[error("Unknown model: {model_name}")]
    UnknownModel { model_name: String },

    /// Model file could not be loaded or decoded
    #[error("Model load error for '{path}': {message}")]
    ModelLoad {
        path: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Model inference failed (typically an input shape mismatch)
    #[error("Prediction error: {message}")]
    Prediction { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a malformed-input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed-input error caused by a JSON decoding failure
    pub fn malformed_json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedInput {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an unknown-feature error
    pub fn unknown_feature(feature: impl Into<String>) -> Self {
        Self::UnknownFeature {
            feature: feature.into(),
        }
    }

    /// Create an insufficient-history error
    pub fn insufficient_history(required: usize, available: usize) -> Self {
        Self::InsufficientHistory {
            required,
            available,
        }
    }

    /// Create an invalid-window error
    pub fn invalid_window(window_size: usize, row_count: usize) -> Self {
        Self::InvalidWindow {
            window_size,
            row_count,
        }
    }

    /// Create an unknown-model error
    pub fn unknown_model(model_name: impl Into<String>) -> Self {
        Self::UnknownModel {
            model_name: model_name.into(),
        }
    }

    /// Create a model load error
    pub fn model_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a model load error caused by a JSON decoding failure
    pub fn model_decode(
        path: impl Into<String>,
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a prediction error
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
