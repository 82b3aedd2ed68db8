//! Fitted linear regression model

use ndarray::ArrayView1;
use serde::Deserialize;

use super::registry::RowModel;
use crate::{Error, Result};

/// Linear regression: `intercept + weights . features`
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressor {
    /// One coefficient per model input feature
    pub weights: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
}

impl RowModel for LinearRegressor {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(Error::prediction(format!(
                "linear model expects {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }

        let dot: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }
}
