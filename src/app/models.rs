//! Core data structures for battery cycle processing.
//!
//! Defines the tagged channel value type, the flattened measurement row,
//! the columnar record/feature tables, and the forecast result.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// One measurement cell as read from the container.
///
/// The variant is decided once at parse time; downstream stages branch on
/// the tag rather than re-probing runtime types.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelValue {
    /// Scalar numeric reading
    Number(f64),
    /// Complex reading (impedance channels)
    Complex(Complex64),
    /// Scalar string (categorical labels)
    Text(String),
    /// Variable-length trace of scalar readings
    Sequence(Vec<ChannelValue>),
    /// Absent or unrepresentable value
    Missing,
}

impl ChannelValue {
    /// Whether this cell carries no value
    pub fn is_missing(&self) -> bool {
        matches!(self, ChannelValue::Missing)
    }

    /// Scalar numeric content, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ChannelValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric rendering of a sequence element: numbers pass through,
    /// complex values collapse to their magnitude, everything else is
    /// unrepresentable.
    pub fn element_magnitude(&self) -> Option<f64> {
        match self {
            ChannelValue::Number(n) => Some(*n),
            ChannelValue::Complex(c) => Some(c.norm()),
            _ => None,
        }
    }
}

/// Fixed channel schema discovered from a container's data entries.
///
/// Holds the union of field names seen across all entries, in first-seen
/// order. Rows are built against this schema with `Missing` for absent
/// fields instead of per-entry field probing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSchema {
    /// Channel field names, excluding the base cycle columns
    pub channel_fields: Vec<String>,
}

impl RecordSchema {
    /// Register a field name, preserving first-seen order
    pub fn register(&mut self, name: &str) {
        if !self.channel_fields.iter().any(|f| f == name) {
            self.channel_fields.push(name.to_string());
        }
    }

    /// Position of a field within the schema
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.channel_fields.iter().position(|f| f == name)
    }

    /// Number of channel fields
    pub fn len(&self) -> usize {
        self.channel_fields.len()
    }

    /// Whether the schema holds no fields
    pub fn is_empty(&self) -> bool {
        self.channel_fields.is_empty()
    }
}

/// One flattened observation: a single data entry merged with its owning
/// cycle's metadata. Created once by the extractor and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Ordinal position of the owning cycle in the source container
    pub cycle_index: usize,
    /// Cycle type label (charge / discharge / impedance)
    pub cycle_type: ChannelValue,
    /// Ambient temperature recorded for the cycle
    pub ambient_temperature: ChannelValue,
    /// Elapsed time recorded for the cycle
    pub time: ChannelValue,
    /// Channel values aligned with the discovered [`RecordSchema`]
    pub channels: Vec<ChannelValue>,
}

/// A named column of raw channel values
#[derive(Debug, Clone, PartialEq)]
pub struct RecordColumn {
    pub name: String,
    pub cells: Vec<ChannelValue>,
}

/// Columnar pivot of the extracted measurement rows, the normalizer's
/// working representation. Column order: the base cycle columns followed
/// by the schema's channel fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    pub columns: Vec<RecordColumn>,
}

impl RecordTable {
    /// Pivot an ordered row sequence into columns
    pub fn from_rows(schema: &RecordSchema, rows: &[MeasurementRow]) -> Self {
        use crate::constants::columns;

        let mut table = RecordTable::default();
        table.columns.push(RecordColumn {
            name: columns::CYCLE_INDEX.to_string(),
            cells: rows
                .iter()
                .map(|r| ChannelValue::Number(r.cycle_index as f64))
                .collect(),
        });
        table.columns.push(RecordColumn {
            name: columns::CYCLE_TYPE.to_string(),
            cells: rows.iter().map(|r| r.cycle_type.clone()).collect(),
        });
        table.columns.push(RecordColumn {
            name: columns::AMBIENT_TEMPERATURE.to_string(),
            cells: rows
                .iter()
                .map(|r| r.ambient_temperature.clone())
                .collect(),
        });
        table.columns.push(RecordColumn {
            name: columns::TIME.to_string(),
            cells: rows.iter().map(|r| r.time.clone()).collect(),
        });

        for (field_idx, field) in schema.channel_fields.iter().enumerate() {
            table.columns.push(RecordColumn {
                name: field.clone(),
                cells: rows
                    .iter()
                    .map(|r| {
                        r.channels
                            .get(field_idx)
                            .cloned()
                            .unwrap_or(ChannelValue::Missing)
                    })
                    .collect(),
            });
        }

        table
    }

    /// Number of rows (cells per column)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Payload of one normalized column
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureData {
    /// Fully repaired numeric values: no NaN, IQR-bounded, scaled to [0,1]
    Numeric(Vec<f64>),
    /// Pass-through scalar strings (categorical labels)
    Text(Vec<String>),
}

/// A named normalized column
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub data: FeatureData,
}

/// The normalized feature table produced by one pipeline run.
///
/// Row-order preserving; numeric columns satisfy the no-missing, bounded,
/// [0,1]-scaled invariants. Values are relative to the batch they were
/// normalized with and are not comparable across containers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    pub columns: Vec<FeatureColumn>,
}

impl FeatureTable {
    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| match &c.data {
            FeatureData::Numeric(v) => v.len(),
            FeatureData::Text(v) => v.len(),
        })
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&FeatureColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a numeric column's values by name
    pub fn numeric_column(&self, name: &str) -> Option<&[f64]> {
        match self.column(name).map(|c| &c.data) {
            Some(FeatureData::Numeric(values)) => Some(values),
            _ => None,
        }
    }

    /// All column names in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Forecasting result: one in-sample prediction series and one
/// multi-step-ahead forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocForecast {
    /// One value per historical row (row models) or window (sequence models)
    pub predicted: Vec<f64>,
    /// Exactly `future_steps` autoregressive forecast values
    pub forecast: Vec<f64>,
}
