//! Integration tests for the extraction and normalization pipeline
//!
//! These tests drive the pipeline from container bytes on disk through the
//! normalized feature table, asserting the table invariants end to end.

use serde_json::json;
use soc_forecaster::Error;
use soc_forecaster::app::models::{FeatureData, RecordTable};
use soc_forecaster::app::services::cycle_extractor::extract;
use soc_forecaster::app::services::table_normalizer::TableNormalizer;
use std::io::Write;

/// Build a container with alternating discharge and impedance cycles
fn build_container(cycle_count: usize) -> String {
    let mut cycles = Vec::new();
    for i in 0..cycle_count {
        let base = 4.2 - 0.01 * i as f64;
        if i % 4 == 3 {
            // Impedance cycle: scalar resistances plus complex traces
            cycles.push(json!({
                "type": "impedance",
                "ambient_temperature": 24.0,
                "time": [2008.0, 4.0, 2.0, 13.0, (i % 60) as f64, 0.0],
                "data": {
                    "Sense_current": [
                        {"re": 0.9 + 0.01 * i as f64, "im": 0.05},
                        {"re": 1.0, "im": -0.02}
                    ],
                    "Rectified_Impedance": [
                        {"re": 0.06, "im": 0.01 * (i % 5) as f64},
                        {"re": 0.05, "im": 0.02}
                    ],
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
                    "Voltage_measured": [base, base - 0.2, base - 0.5],
                    "Current_measured": [1.5, 1.2, 0.4],
                    "Temperature_measured": [24.0, 25.5 + 0.1 * i as f64, 27.0],
                    "Current_load": [2.0, 2.0, 1.9],
                    "Sense_current": [1.1, 1.0, 0.9]
                }
            }));
        }
    }

    json!({
        "__header__": "converted container",
        "B0005": {"cycle": cycles}
    })
    .to_string()
}

#[test]
fn test_pipeline_from_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(build_container(16).as_bytes()).unwrap();

    let bytes = std::fs::read(file.path()).unwrap();
    let extraction = extract(&bytes).unwrap();
    assert_eq!(extraction.rows.len(), 16);

    let table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&table);

    // Row count is invariant across normalization
    assert_eq!(normalized.table.row_count(), 16);
}

#[test]
fn test_normalized_numeric_invariants() {
    let extraction = extract(build_container(20).as_bytes()).unwrap();
    let table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&table);

    for column in &normalized.table.columns {
        if let FeatureData::Numeric(values) = &column.data {
            for (i, v) in values.iter().enumerate() {
                assert!(
                    v.is_finite(),
                    "column '{}' row {} has a missing value",
                    column.name,
                    i
                );
                assert!(
                    (0.0..=1.0).contains(v),
                    "column '{}' row {} = {} outside [0,1]",
                    column.name,
                    i,
                    v
                );
            }
        }
    }
}

#[test]
fn test_sequence_columns_are_flattened() {
    let extraction = extract(build_container(20).as_bytes()).unwrap();
    let table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&table);

    let names = normalized.table.column_names();
    for source in [
        "Voltage_measured",
        "Current_measured",
        "Temperature_measured",
        "Current_load",
        "Sense_current",
        "Rectified_Impedance",
        "time",
    ] {
        assert!(
            !names.contains(&source),
            "sequence column '{}' should have been dropped",
            source
        );
        for suffix in ["_mean", "_max", "_min", "_std"] {
            let derived = format!("{}{}", source, suffix);
            assert!(
                names.iter().any(|n| *n == derived),
                "derived column '{}' is missing",
                derived
            );
        }
    }

    // Scalar impedance fields stay as plain numeric columns
    assert!(names.contains(&"Re"));
    assert!(names.contains(&"Rct"));
}

#[test]
fn test_default_model_features_are_all_present() {
    let extraction = extract(build_container(20).as_bytes()).unwrap();
    let table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&table);

    let names = normalized.table.column_names();
    for feature in soc_forecaster::constants::DEFAULT_FEATURES {
        assert!(
            names.iter().any(|n| n == feature),
            "default feature '{}' missing from normalized table",
            feature
        );
    }
}

#[test]
fn test_container_with_no_data_cycles_yields_empty_table() {
    let doc = json!({
        "B0018": {
            "cycle": [
                {"type": "rest", "ambient_temperature": 24.0, "time": 0.0},
                {"type": "rest", "ambient_temperature": 24.0, "time": 60.0}
            ]
        }
    })
    .to_string();

    let extraction = extract(doc.as_bytes()).unwrap();
    assert!(extraction.rows.is_empty());

    // Normalizing the empty table is clean, not a crash: empty in, empty out
    let table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&table);
    assert_eq!(normalized.table.row_count(), 0);
}

#[test]
fn test_container_without_battery_entity_is_malformed() {
    let doc = json!({"__header__": "x", "__version__": "1.0"}).to_string();
    let err = extract(doc.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
}
