//! Integration tests for the full forecast workflow
//!
//! These tests exercise container -> normalized table -> feature matrix ->
//! registry-loaded model -> forecast, the same path the predict command
//! takes.

use serde_json::json;
use soc_forecaster::Error;
use soc_forecaster::app::models::RecordTable;
use soc_forecaster::app::services::cycle_extractor::extract;
use soc_forecaster::app::services::feature_matrix::select_features;
use soc_forecaster::app::services::forecast_engine::ForecastEngine;
use soc_forecaster::app::services::model_registry::{ModelCapability, ModelRegistry};
use soc_forecaster::app::services::table_normalizer::TableNormalizer;
use soc_forecaster::config::ForecastConfig;
use soc_forecaster::constants::DEFAULT_FEATURES;
use tempfile::TempDir;

/// Build a container covering every default model feature
fn build_container(cycle_count: usize) -> String {
    let mut cycles = Vec::new();
    for i in 0..cycle_count {
        let base = 4.2 - 0.005 * i as f64;
        if i % 3 == 2 {
            cycles.push(json!({
                "type": "impedance",
                "ambient_temperature": 24.0,
                "time": [2008.0, 4.0, 2.0, 13.0, (i % 60) as f64, 0.0],
                "data": {
                    "Sense_current": [{"re": 0.9, "im": 0.05}, {"re": 1.0, "im": -0.02}],
                    "Rectified_Impedance": [{"re": 0.06, "im": 0.01}, {"re": 0.05, "im": 0.02}],
                    "Re": 0.05 + 0.001 * i as f64,
                    "Rct": 0.08 + 0.002 * i as f64
                }
            }));
        } else {
            cycles.push(json!({
                "type": if i % 2 == 0 { "charge" } else { "discharge" },
                "ambient_temperature": 24.0,
                "time": [2008.0, 4.0, 2.0, 13.0, (i % 60) as f64, 30.0],
                "data": {
                    "Voltage_measured": [base, base - 0.3, base - 0.6],
                    "Current_measured": [1.5, 1.1, 0.4],
                    "Temperature_measured": [24.0, 25.0 + 0.05 * i as f64, 26.5],
                    "Current_load": [2.0, 2.0, 1.9],
                    "Sense_current": [1.1, 1.0, 0.9]
                }
            }));
        }
    }

    json!({"B0005": {"cycle": cycles}}).to_string()
}

/// Write a models directory with one model of each capability
fn write_models_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    let linear = json!({
        "kind": "linear",
        "weights": [0.05, 0.05, 0.1, 0.1, 0.1, 0.1, 0.1, 0.15, 0.15, 0.1],
        "intercept": 0.05
    });
    std::fs::write(
        dir.path().join("LinearRegression.json"),
        linear.to_string(),
    )
    .unwrap();

    // Zero-weight LSTM: every prediction equals b_out
    let zero_matrix = |rows: usize, cols: usize| vec![vec![0.0; cols]; rows];
    let lstm = json!({
        "kind": "lstm",
        "input_size": 10,
        "hidden_size": 2,
        "w_ii": zero_matrix(2, 10), "w_hi": zero_matrix(2, 2), "b_i": [0.0, 0.0],
        "w_if": zero_matrix(2, 10), "w_hf": zero_matrix(2, 2), "b_f": [0.0, 0.0],
        "w_ig": zero_matrix(2, 10), "w_hg": zero_matrix(2, 2), "b_g": [0.0, 0.0],
        "w_io": zero_matrix(2, 10), "w_ho": zero_matrix(2, 2), "b_o": [0.0, 0.0],
        "w_out": [0.0, 0.0],
        "b_out": 0.55
    });
    std::fs::write(dir.path().join("LSTM.json"), lstm.to_string()).unwrap();

    dir
}

/// Run the shared front of the pipeline: container bytes to feature matrix
fn feature_matrix(container: &str, config: &ForecastConfig) -> ndarray::Array2<f64> {
    let extraction = extract(container.as_bytes()).unwrap();
    let table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&table);
    select_features(&normalized.table, &config.features).unwrap()
}

#[test]
fn test_row_model_end_to_end() {
    let models = write_models_dir();
    let registry = ModelRegistry::load_dir(models.path()).unwrap();
    let model = registry.get("LinearRegression").unwrap();
    assert_eq!(model.capability(), ModelCapability::Row);

    let config = ForecastConfig::default().with_future_steps(5);
    let matrix = feature_matrix(&build_container(24), &config);
    assert_eq!(matrix.ncols(), DEFAULT_FEATURES.len());

    let engine = ForecastEngine::new(config).unwrap();
    let result = engine.run(model, &matrix, None).unwrap();

    // One in-sample prediction per row, exactly future_steps forecasts
    assert_eq!(result.predicted.len(), 24);
    assert_eq!(result.forecast.len(), 5);

    // Scaled features lie in [0,1], so the linear output is bounded by the
    // coefficient mass plus intercept
    for value in result.predicted.iter().chain(result.forecast.iter()) {
        assert!((0.0..=1.1).contains(value), "prediction {} out of range", value);
    }
}

#[test]
fn test_sequence_model_end_to_end() {
    let models = write_models_dir();
    let registry = ModelRegistry::load_dir(models.path()).unwrap();
    let model = registry.get("LSTM").unwrap();
    assert_eq!(model.capability(), ModelCapability::Sequence);

    let config = ForecastConfig::default().with_future_steps(3);
    let matrix = feature_matrix(&build_container(24), &config);

    let engine = ForecastEngine::new(config).unwrap();
    let result = engine.run(model, &matrix, None).unwrap();

    // row_count - window_size in-sample windows
    assert_eq!(result.predicted.len(), 24 - 10);
    assert_eq!(result.forecast.len(), 3);

    // The zero-weight LSTM reduces to its output bias everywhere
    for value in result.predicted.iter().chain(result.forecast.iter()) {
        assert!((value - 0.55).abs() < 1e-12);
    }
}

#[test]
fn test_sequence_model_needs_window_of_history() {
    let models = write_models_dir();
    let registry = ModelRegistry::load_dir(models.path()).unwrap();
    let model = registry.get("LSTM").unwrap();

    let config = ForecastConfig::default().with_future_steps(2);
    let matrix = feature_matrix(&build_container(6), &config);

    let engine = ForecastEngine::new(config).unwrap();
    let err = engine.run(model, &matrix, None).unwrap_err();
    assert!(matches!(err, Error::InsufficientHistory { required: 10, .. }));
}

#[test]
fn test_unknown_model_is_reported() {
    let models = write_models_dir();
    let registry = ModelRegistry::load_dir(models.path()).unwrap();

    let err = registry.get("XGBoost").unwrap_err();
    assert!(matches!(err, Error::UnknownModel { model_name } if model_name == "XGBoost"));
}

#[test]
fn test_zero_future_steps_disables_forecasting() {
    let models = write_models_dir();
    let registry = ModelRegistry::load_dir(models.path()).unwrap();
    let model = registry.get("LinearRegression").unwrap();

    let config = ForecastConfig::default().with_future_steps(0);
    let matrix = feature_matrix(&build_container(12), &config);

    let engine = ForecastEngine::new(config).unwrap();
    let result = engine.run(model, &matrix, None).unwrap();

    assert_eq!(result.predicted.len(), 12);
    assert!(result.forecast.is_empty());
}

#[test]
fn test_forecast_serializes_as_json_mapping() {
    let models = write_models_dir();
    let registry = ModelRegistry::load_dir(models.path()).unwrap();
    let model = registry.get("LinearRegression").unwrap();

    let config = ForecastConfig::default().with_future_steps(2);
    let matrix = feature_matrix(&build_container(12), &config);
    let engine = ForecastEngine::new(config).unwrap();
    let result = engine.run(model, &matrix, None).unwrap();

    let rendered = serde_json::to_value(&result).unwrap();
    assert_eq!(rendered["predicted"].as_array().unwrap().len(), 12);
    assert_eq!(rendered["forecast"].as_array().unwrap().len(), 2);
}
