//! Configuration management and validation.
//!
//! Provides the configuration surface consumed by the forecasting core:
//! window size, forecast horizon, the ordered model feature list, and the
//! autoregressive feedback feature.

use crate::constants::{
    DEFAULT_FEATURES, DEFAULT_FUTURE_STEPS, DEFAULT_WINDOW_SIZE, MAX_FUTURE_STEPS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one forecasting run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Rolling window length for sequence models and the forecast state
    pub window_size: usize,

    /// Number of autoregressive steps to forecast (0 disables forecasting)
    pub future_steps: usize,

    /// Ordered feature names projected out of the normalized table
    pub features: Vec<String>,

    /// Feature whose value is replaced by the model's own prediction when
    /// rolling the forecast state forward. `None` selects the final entry
    /// of `features`.
    pub feedback_feature: Option<String>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            future_steps: DEFAULT_FUTURE_STEPS,
            features: DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect(),
            feedback_feature: None,
        }
    }
}

impl ForecastConfig {
    /// Create configuration with a custom window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Create configuration with a custom forecast horizon
    pub fn with_future_steps(mut self, future_steps: usize) -> Self {
        self.future_steps = future_steps;
        self
    }

    /// Create configuration with a custom feature list
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Create configuration with an explicit feedback feature
    pub fn with_feedback_feature(mut self, feature: impl Into<String>) -> Self {
        self.feedback_feature = Some(feature.into());
        self
    }

    /// Validate the configuration independent of any particular table
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::configuration(
                "window_size must be a positive integer",
            ));
        }
        if self.future_steps > MAX_FUTURE_STEPS {
            return Err(Error::configuration(format!(
                "future_steps {} exceeds the maximum of {}",
                self.future_steps, MAX_FUTURE_STEPS
            )));
        }
        if self.features.is_empty() {
            return Err(Error::configuration("feature list must not be empty"));
        }
        if let Some(feedback) = &self.feedback_feature {
            if !self.features.iter().any(|f| f == feedback) {
                return Err(Error::configuration(format!(
                    "feedback feature '{}' is not in the configured feature list",
                    feedback
                )));
            }
        }
        Ok(())
    }

    /// Index of the feedback feature within the configured feature list
    pub fn feedback_index(&self) -> usize {
        match &self.feedback_feature {
            Some(name) => self
                .features
                .iter()
                .position(|f| f == name)
                .unwrap_or(self.features.len() - 1),
            None => self.features.len() - 1,
        }
    }
}
