//! Tests for the cycle extractor module

pub mod extractor_tests;

use serde_json::json;

/// A small but representative container: three cycles, one without data,
/// one with an array payload, complex impedance values, and a ragged
/// channel field set across entries.
pub fn sample_container_json() -> String {
    json!({
        "__header__": "MATLAB 5.0 MAT-file",
        "__version__": "1.0",
        "B0005": {
            "cycle": [
                {
                    "type": "charge",
                    "ambient_temperature": 24.0,
                    "time": [2008.0, 4.0, 2.0, 13.0, 8.0, 17.0],
                    "data": {
                        "Voltage_measured": [3.2, 3.6, 4.1],
                        "Current_measured": [1.5, 1.5, 0.2],
                        "Temperature_measured": [24.3, 25.1, 26.0]
                    }
                },
                {
                    "type": "impedance",
                    "ambient_temperature": 24.0,
                    "time": [2008.0, 4.0, 2.0, 15.0, 25.0, 41.0],
                    "data": {
                        "Sense_current": [
                            {"re": 0.9, "im": 0.1},
                            {"re": 1.1, "im": -0.2}
                        ],
                        "Rectified_Impedance": [
                            {"re": 0.06, "im": 0.08},
                            {"re": 0.05, "im": 0.12}
                        ],
                        "Re": 0.061,
                        "Rct": 0.082
                    }
                },
                {
                    "type": "rest",
                    "ambient_temperature": 24.0,
                    "time": [2008.0, 4.0, 2.0, 17.0, 2.0, 4.0]
                }
            ]
        }
    })
    .to_string()
}

/// A container whose battery entity has a single bare cycle object
pub fn single_cycle_container_json() -> String {
    json!({
        "B0006": {
            "cycle": {
                "type": "discharge",
                "ambient_temperature": 4.0,
                "time": 120.5,
                "data": [
                    {"Voltage_measured": [4.2, 3.9], "Current_load": [2.0, 2.0]},
                    {"Voltage_measured": [3.9, 3.6], "Current_load": [2.0, 2.0]}
                ]
            }
        }
    })
    .to_string()
}
