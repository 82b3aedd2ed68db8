//! Model registry and capability tagging
//!
//! The registry maps model names to capability-tagged fitted models. It is
//! built explicitly by the caller (typically from a directory of JSON model
//! files) and passed into the forecast engine; the engine never performs a
//! global lookup.

use ndarray::{ArrayView1, ArrayView2};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use super::linear::LinearRegressor;
use super::lstm::LstmRegressor;
use super::tree::{DecisionTreeRegressor, GradientBoostingRegressor, RandomForestRegressor};
use crate::constants::MODEL_FILE_EXTENSION;
use crate::{Error, Result};

/// Calling convention of a fitted model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCapability {
    /// Consumes one feature row, returns one scalar
    Row,
    /// Consumes one window of feature rows, returns one scalar
    Sequence,
}

impl fmt::Display for ModelCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelCapability::Row => write!(f, "row"),
            ModelCapability::Sequence => write!(f, "sequence"),
        }
    }
}

/// A fitted model that predicts from a single feature row.
///
/// Implementations must be pure for read-only inference so concurrent
/// pipeline runs can share one registry.
pub trait RowModel: Send + Sync + fmt::Debug {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64>;
}

/// A fitted model that predicts from a window of feature rows
pub trait SequenceModel: Send + Sync + fmt::Debug {
    fn predict(&self, window: ArrayView2<'_, f64>) -> Result<f64>;
}

/// A capability-tagged fitted model
#[derive(Debug)]
pub enum FittedModel {
    Row(Box<dyn RowModel>),
    Sequence(Box<dyn SequenceModel>),
}

impl FittedModel {
    /// The model's calling convention
    pub fn capability(&self) -> ModelCapability {
        match self {
            FittedModel::Row(_) => ModelCapability::Row,
            FittedModel::Sequence(_) => ModelCapability::Sequence,
        }
    }
}

/// On-disk representation of a fitted model, tagged by kind
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Linear(LinearRegressor),
    DecisionTree(DecisionTreeRegressor),
    RandomForest(RandomForestRegressor),
    GradientBoosting(GradientBoostingRegressor),
    Lstm(LstmRegressor),
}

impl ModelSpec {
    /// Wrap the spec in its capability-tagged runtime form
    pub fn into_fitted(self) -> FittedModel {
        match self {
            ModelSpec::Linear(m) => FittedModel::Row(Box::new(m)),
            ModelSpec::DecisionTree(m) => FittedModel::Row(Box::new(m)),
            ModelSpec::RandomForest(m) => FittedModel::Row(Box::new(m)),
            ModelSpec::GradientBoosting(m) => FittedModel::Row(Box::new(m)),
            ModelSpec::Lstm(m) => FittedModel::Sequence(Box::new(m)),
        }
    }
}

/// Registry of served fitted models
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, FittedModel>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under a name, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, model: FittedModel) {
        self.models.insert(name.into(), model);
    }

    /// Look up a model; absent names are an [`Error::UnknownModel`]
    pub fn get(&self, name: &str) -> Result<&FittedModel> {
        self.models
            .get(name)
            .ok_or_else(|| Error::unknown_model(name))
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry holds no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered names with capabilities, sorted by name
    pub fn entries(&self) -> Vec<(&str, ModelCapability)> {
        let mut entries: Vec<_> = self
            .models
            .iter()
            .map(|(name, model)| (name.as_str(), model.capability()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Load every model file from a directory.
    ///
    /// Each `*.json` file deserializes as one [`ModelSpec`] and registers
    /// under its file stem.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(|e| Error::io(format!("cannot read models directory '{}'", dir.display()), e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(MODEL_FILE_EXTENSION))
            })
            .collect();
        paths.sort();

        for path in paths {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let model = Self::load_file(&path)?;
            debug!(
                "Loaded model '{}' ({}) from {}",
                name,
                model.capability(),
                path.display()
            );
            registry.insert(name, model);
        }

        info!(
            "Model registry ready: {} models from {}",
            registry.len(),
            dir.display()
        );
        Ok(registry)
    }

    /// Load a single fitted model file
    pub fn load_file(path: impl AsRef<Path>) -> Result<FittedModel> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("cannot read model file '{}'", path.display()), e))?;
        let spec: ModelSpec = serde_json::from_slice(&bytes).map_err(|e| {
            Error::model_decode(
                path.display().to_string(),
                "model file is not a valid fitted model",
                e,
            )
        })?;
        Ok(spec.into_fitted())
    }
}
