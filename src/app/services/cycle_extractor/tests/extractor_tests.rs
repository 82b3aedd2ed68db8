//! Tests for schema discovery and row emission

use super::{sample_container_json, single_cycle_container_json};
use crate::app::models::ChannelValue;
use crate::app::services::cycle_extractor::{BatteryContainer, extract, extract_records};

#[test]
fn test_extract_sample_rows() {
    let result = extract(sample_container_json().as_bytes()).unwrap();

    // One entry in cycle 0, one in cycle 1, cycle 2 skipped
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.stats.cycles_total, 3);
    assert_eq!(result.stats.cycles_skipped, 1);
    assert_eq!(result.stats.rows_emitted, 2);

    // Schema is the union of fields across both entries, first-seen order
    let fields = &result.schema.channel_fields;
    assert_eq!(
        fields,
        &vec![
            "Voltage_measured".to_string(),
            "Current_measured".to_string(),
            "Temperature_measured".to_string(),
            "Sense_current".to_string(),
            "Rectified_Impedance".to_string(),
            "Re".to_string(),
            "Rct".to_string(),
        ]
    );
}

#[test]
fn test_rows_carry_cycle_metadata() {
    let result = extract(sample_container_json().as_bytes()).unwrap();

    let charge_row = &result.rows[0];
    assert_eq!(charge_row.cycle_index, 0);
    assert_eq!(
        charge_row.cycle_type,
        ChannelValue::Text("charge".to_string())
    );
    assert_eq!(charge_row.ambient_temperature, ChannelValue::Number(24.0));

    let impedance_row = &result.rows[1];
    assert_eq!(impedance_row.cycle_index, 1);
    assert_eq!(
        impedance_row.cycle_type,
        ChannelValue::Text("impedance".to_string())
    );
}

#[test]
fn test_absent_schema_fields_are_missing() {
    let result = extract(sample_container_json().as_bytes()).unwrap();

    // The charge entry has no impedance fields; they must appear as Missing
    let charge_row = &result.rows[0];
    let re_idx = result.schema.index_of("Re").unwrap();
    assert_eq!(charge_row.channels[re_idx], ChannelValue::Missing);

    // And vice versa for voltage in the impedance entry
    let impedance_row = &result.rows[1];
    let voltage_idx = result.schema.index_of("Voltage_measured").unwrap();
    assert_eq!(impedance_row.channels[voltage_idx], ChannelValue::Missing);
}

#[test]
fn test_multi_entry_payload_emits_one_row_each() {
    let result = extract(single_cycle_container_json().as_bytes()).unwrap();

    assert_eq!(result.rows.len(), 2);
    assert!(result.rows.iter().all(|r| r.cycle_index == 0));
}

#[test]
fn test_container_without_any_data_yields_no_rows() {
    let doc = serde_json::json!({
        "B0007": {
            "cycle": [
                {"type": "rest", "ambient_temperature": 24.0, "time": 1.0},
                {"type": "rest", "ambient_temperature": 24.0, "time": 2.0}
            ]
        }
    })
    .to_string();

    let container = BatteryContainer::from_slice(doc.as_bytes()).unwrap();
    let result = extract_records(&container);

    assert!(result.rows.is_empty());
    assert!(result.schema.is_empty());
    assert_eq!(result.stats.cycles_skipped, 2);
    assert_eq!(result.stats.coverage_rate(), 0.0);
}
