//! Tests for the table normalizer module


use crate::app::models::{ChannelValue, RecordColumn, RecordTable};

/// Build a single-column record table for unit tests
pub fn single_column_table(name: &str, cells: Vec<ChannelValue>) -> RecordTable {
    RecordTable {
        columns: vec![RecordColumn {
            name: name.to_string(),
            cells,
        }],
    }
}

/// Shorthand for a numeric cell
pub fn num(v: f64) -> ChannelValue {
    ChannelValue::Number(v)
}

/// Shorthand for a numeric sequence cell
pub fn seq(values: &[f64]) -> ChannelValue {
    ChannelValue::Sequence(values.iter().map(|v| ChannelValue::Number(*v)).collect())
}
