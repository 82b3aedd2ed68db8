//! Application constants for the SOC forecaster
//!
//! This module contains configuration constants, default values, and column
//! name mappings used throughout the forecasting pipeline.

// =============================================================================
// Forecasting Defaults
// =============================================================================

/// Default rolling window length for sequence models and forecast state
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Default number of autoregressive forecast steps
pub const DEFAULT_FUTURE_STEPS: usize = 5;

/// Upper bound on forecast steps accepted from callers
pub const MAX_FUTURE_STEPS: usize = 50;

/// Model input features served by default, in model input order.
///
/// The final entry is the default autoregressive feedback slot: each forecast
/// step writes its own prediction back into that column before the next step.
pub const DEFAULT_FEATURES: &[&str] = &[
    "Re",
    "Rct",
    "Sense_current_max",
    "Temperature_measured_min",
    "time_min",
    "Current_load_mean",
    "Rectified_Impedance_std",
    "Voltage_measured_mean",
    "Current_measured_mean",
    "time_std",
];

// =============================================================================
// Container Structure
// =============================================================================

/// Prefix marking internal top-level container keys (loader metadata)
pub const INTERNAL_KEY_PREFIX: &str = "__";

/// Member of the battery entity holding the cycle collection
pub const CYCLE_MEMBER: &str = "cycle";

/// Member of a cycle holding its measurement payload
pub const DATA_MEMBER: &str = "data";

/// Cycle metadata member names
pub mod cycle_fields {
    pub const TYPE: &str = "type";
    pub const AMBIENT_TEMPERATURE: &str = "ambient_temperature";
    pub const TIME: &str = "time";
}

/// Complex number member names inside channel values
pub const COMPLEX_RE_MEMBER: &str = "re";
pub const COMPLEX_IM_MEMBER: &str = "im";

// =============================================================================
// Column Name Constants
// =============================================================================

/// Base columns every measurement row carries ahead of its channel fields
pub mod columns {
    pub const CYCLE_INDEX: &str = "cycle_index";
    pub const CYCLE_TYPE: &str = "cycle_type";
    pub const AMBIENT_TEMPERATURE: &str = "ambient_temperature";
    pub const TIME: &str = "time";

    /// All base columns in table order
    pub const BASE: &[&str] = &[CYCLE_INDEX, CYCLE_TYPE, AMBIENT_TEMPERATURE, TIME];
}

/// Suffixes of the numeric columns derived from a sequence-valued column
pub const SEQUENCE_STAT_SUFFIXES: &[&str] = &["_mean", "_max", "_min", "_std"];

// =============================================================================
// Normalization Constants
// =============================================================================

/// IQR multiplier for outlier clipping bounds
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Lower quartile probability used for clipping
pub const LOWER_QUARTILE: f64 = 0.25;

/// Upper quartile probability used for clipping
pub const UPPER_QUARTILE: f64 = 0.75;

// =============================================================================
// Model Files
// =============================================================================

/// Extension of fitted model files in a models directory
pub const MODEL_FILE_EXTENSION: &str = "json";

/// Default models directory relative to the working directory
pub const DEFAULT_MODELS_DIR: &str = "models";

// =============================================================================
// Performance and Monitoring Constants
// =============================================================================

/// Minimum row count before the CLI shows a progress bar for the
/// in-sample prediction pass
pub const PROGRESS_BAR_THRESHOLD: usize = 500;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a top-level container key is internal loader metadata
pub fn is_internal_key(key: &str) -> bool {
    key.starts_with(INTERNAL_KEY_PREFIX)
}

/// Build the derived column name for a sequence statistic
pub fn sequence_stat_column(base: &str, suffix: &str) -> String {
    format!("{}{}", base, suffix)
}
