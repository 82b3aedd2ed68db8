//! Tests for the forecast engine module


use ndarray::{Array2, ArrayView1, ArrayView2};
use std::sync::Mutex;

use crate::Result;
use crate::app::services::model_registry::{FittedModel, RowModel, SequenceModel};
use crate::config::ForecastConfig;

/// Row model returning a fixed value regardless of input
#[derive(Debug)]
pub struct ConstantRowModel(pub f64);

impl RowModel for ConstantRowModel {
    fn predict(&self, _features: ArrayView1<'_, f64>) -> Result<f64> {
        Ok(self.0)
    }
}

/// Row model echoing its input's final feature
#[derive(Debug)]
pub struct LastFeatureRowModel;

impl RowModel for LastFeatureRowModel {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        Ok(features[features.len() - 1])
    }
}

/// Row model that records every input row it sees, predicting a constant
#[derive(Debug, Default)]
pub struct SpyRowModel {
    pub value: f64,
    pub inputs: Mutex<Vec<Vec<f64>>>,
}

impl RowModel for SpyRowModel {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        self.inputs.lock().unwrap().push(features.to_vec());
        Ok(self.value)
    }
}

/// Sequence model returning a fixed value regardless of input
#[derive(Debug)]
pub struct ConstantSequenceModel(pub f64);

impl SequenceModel for ConstantSequenceModel {
    fn predict(&self, _window: ArrayView2<'_, f64>) -> Result<f64> {
        Ok(self.0)
    }
}

/// Sequence model echoing the final feature of its window's newest row
#[derive(Debug)]
pub struct LastFeatureSequenceModel;

impl SequenceModel for LastFeatureSequenceModel {
    fn predict(&self, window: ArrayView2<'_, f64>) -> Result<f64> {
        let last_row = window.row(window.nrows() - 1);
        Ok(last_row[last_row.len() - 1])
    }
}

/// Configuration for a three-feature table named a, b, c
pub fn three_feature_config() -> ForecastConfig {
    ForecastConfig::default().with_features(vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
    ])
}

/// A rows x 3 matrix whose every cell is `fill`, except the final column
/// which is `last`
pub fn uniform_matrix(rows: usize, fill: f64, last: f64) -> Array2<f64> {
    let mut matrix = Array2::from_elem((rows, 3), fill);
    for i in 0..rows {
        matrix[[i, 2]] = last;
    }
    matrix
}

/// Wrap a row model for the engine
pub fn row(model: impl RowModel + 'static) -> FittedModel {
    FittedModel::Row(Box::new(model))
}

/// Wrap a sequence model for the engine
pub fn sequence(model: impl SequenceModel + 'static) -> FittedModel {
    FittedModel::Sequence(Box::new(model))
}
