//! Command-line argument definitions for the SOC forecaster
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::ForecastConfig;
use crate::constants::{DEFAULT_FUTURE_STEPS, DEFAULT_MODELS_DIR, DEFAULT_WINDOW_SIZE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the battery SOC forecaster
///
/// Normalizes nested battery-cycle containers into a clean feature table
/// and produces SOC predictions and multi-step forecasts with fitted models.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "soc-forecaster",
    version,
    about = "Normalize battery cycle data and forecast state-of-charge",
    long_about = "Processes nested battery-cycle measurement containers into a clean, \
                  outlier-bounded, scaled feature table, then produces in-sample SOC \
                  predictions and multi-step autoregressive forecasts using fitted \
                  regression or sequence models loaded from a models directory."
)]
pub struct Args {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the SOC forecaster
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and forecast SOC with one model (main command)
    Predict(PredictArgs),
    /// Report extraction and normalization statistics for a container
    Inspect(InspectArgs),
    /// List the fitted models available in a models directory
    Models(ModelsArgs),
}

/// Arguments for the predict command (main forecasting workflow)
#[derive(Debug, Clone, Parser)]
pub struct PredictArgs {
    /// Path to the battery container file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the battery container file"
    )]
    pub input: PathBuf,

    /// Name of the fitted model to use
    ///
    /// Must match the file stem of a model in the models directory,
    /// e.g. LinearRegression, RandomForest, LSTM.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "NAME",
        help = "Name of the fitted model to use"
    )]
    pub model: String,

    /// Number of autoregressive forecast steps
    #[arg(
        long = "future-steps",
        value_name = "N",
        default_value_t = DEFAULT_FUTURE_STEPS,
        help = "Number of autoregressive forecast steps"
    )]
    pub future_steps: usize,

    /// Rolling window length for sequence models and the forecast state
    #[arg(
        long = "window-size",
        value_name = "N",
        default_value_t = DEFAULT_WINDOW_SIZE,
        help = "Rolling window length"
    )]
    pub window_size: usize,

    /// Directory holding fitted model files
    #[arg(
        long = "models-dir",
        value_name = "DIR",
        default_value = DEFAULT_MODELS_DIR,
        help = "Directory holding fitted model files"
    )]
    pub models_dir: PathBuf,

    /// Comma-separated feature list overriding the default model features
    #[arg(
        long = "features",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated feature list overriding the defaults"
    )]
    pub features: Option<Vec<String>>,

    /// Feature to feed each step's prediction back into
    ///
    /// Defaults to the final feature of the configured list.
    #[arg(
        long = "feedback-feature",
        value_name = "NAME",
        help = "Feature fed back during autoregressive forecasting"
    )]
    pub feedback_feature: Option<String>,

    /// Print the raw prediction and forecast series as JSON
    #[arg(long = "json", help = "Print the result as JSON")]
    pub json: bool,
}

impl PredictArgs {
    /// Build the forecast configuration from the CLI arguments
    pub fn to_config(&self) -> ForecastConfig {
        let mut config = ForecastConfig::default()
            .with_window_size(self.window_size)
            .with_future_steps(self.future_steps);
        if let Some(features) = &self.features {
            config = config.with_features(features.clone());
        }
        if let Some(feedback) = &self.feedback_feature {
            config = config.with_feedback_feature(feedback.clone());
        }
        config
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Path to the battery container file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the battery container file"
    )]
    pub input: PathBuf,

    /// Also list every normalized column with its type
    #[arg(long = "columns", help = "List every normalized column")]
    pub columns: bool,
}

/// Arguments for the models command
#[derive(Debug, Clone, Parser)]
pub struct ModelsArgs {
    /// Directory holding fitted model files
    #[arg(
        long = "models-dir",
        value_name = "DIR",
        default_value = DEFAULT_MODELS_DIR,
        help = "Directory holding fitted model files"
    )]
    pub models_dir: PathBuf,
}
