//! Forecast engine orchestration
//!
//! Runs one forecasting invocation over a projected feature matrix: an
//! in-sample pass over the history, then `future_steps` autoregressive
//! steps in which the model's own output replaces the configured feedback
//! feature of the newest state row.

use indicatif::ProgressBar;
use ndarray::Array2;
use tracing::{debug, info};

use super::state::{RollingRows, RollingWindow};
use crate::app::models::SocForecast;
use crate::app::services::feature_matrix::window_iter;
use crate::app::services::model_registry::{FittedModel, RowModel, SequenceModel};
use crate::config::ForecastConfig;
use crate::{Error, Result};

/// Forecast engine for fitted SOC models.
///
/// Owns nothing across invocations; each [`run`](Self::run) derives its own
/// forecast state from the supplied matrix. Models must be safe for
/// read-only concurrent inference, which the registry's model traits
/// require (`Send + Sync`).
#[derive(Debug)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    /// Create an engine for a validated configuration
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run the in-sample and forecast passes for one model.
    ///
    /// The matrix must be the projection of a normalized table onto the
    /// engine's configured feature list; its column order defines the
    /// feedback slot. `progress` ticks once per in-sample prediction.
    pub fn run(
        &self,
        model: &FittedModel,
        matrix: &Array2<f64>,
        progress: Option<&ProgressBar>,
    ) -> Result<SocForecast> {
        if matrix.ncols() != self.config.features.len() {
            return Err(Error::configuration(format!(
                "matrix has {} columns but {} features are configured",
                matrix.ncols(),
                self.config.features.len()
            )));
        }

        let result = match model {
            FittedModel::Row(row_model) => self.run_row_model(row_model.as_ref(), matrix, progress),
            FittedModel::Sequence(sequence_model) => {
                self.run_sequence_model(sequence_model.as_ref(), matrix, progress)
            }
        }?;

        info!(
            "Forecast complete: {} in-sample predictions, {} forecast steps",
            result.predicted.len(),
            result.forecast.len()
        );
        Ok(result)
    }

    /// Row-model variant: one prediction per historical row, then a rolling
    /// row buffer advanced by feeding each prediction back into the
    /// feedback slot of a copy of the newest row.
    fn run_row_model(
        &self,
        model: &dyn RowModel,
        matrix: &Array2<f64>,
        progress: Option<&ProgressBar>,
    ) -> Result<SocForecast> {
        let rows = matrix.nrows();
        if rows == 0 {
            return Err(Error::insufficient_history(1, 0));
        }

        let mut predicted = Vec::with_capacity(rows);
        for row in matrix.rows() {
            predicted.push(model.predict(row)?);
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        let feedback = self.config.feedback_index();
        let mut state = RollingRows::seed(matrix, self.config.window_size);
        debug!(
            "Row-model forecast: seeded state with {} rows, feedback slot {}",
            state.len(),
            feedback
        );

        let mut forecast = Vec::with_capacity(self.config.future_steps);
        for _ in 0..self.config.future_steps {
            let next = model.predict(state.last().view())?;
            forecast.push(next);

            let mut new_row = state.last().clone();
            new_row[feedback] = next;
            state.push(new_row);
        }

        Ok(SocForecast {
            predicted,
            forecast,
        })
    }

    /// Sequence-model variant: one prediction per overlapping in-sample
    /// window, then a sliding window advanced by synthesizing one row per
    /// step from the window's newest row and the fed-back prediction.
    fn run_sequence_model(
        &self,
        model: &dyn SequenceModel,
        matrix: &Array2<f64>,
        progress: Option<&ProgressBar>,
    ) -> Result<SocForecast> {
        let rows = matrix.nrows();
        let window_size = self.config.window_size;
        if rows < window_size {
            return Err(Error::insufficient_history(window_size, rows));
        }

        let mut predicted = Vec::with_capacity(rows - window_size);
        for window in window_iter(matrix, window_size)? {
            predicted.push(model.predict(window)?);
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        let feedback = self.config.feedback_index();
        let mut state = RollingWindow::seed(matrix, window_size);
        debug!(
            "Sequence-model forecast: seeded window of {} rows, feedback slot {}",
            window_size, feedback
        );

        let mut forecast = Vec::with_capacity(self.config.future_steps);
        for _ in 0..self.config.future_steps {
            let next = model.predict(state.view())?;
            forecast.push(next);

            let mut new_row = state.last_row().to_owned();
            new_row[feedback] = next;
            state.slide(new_row);
        }

        Ok(SocForecast {
            predicted,
            forecast,
        })
    }
}
