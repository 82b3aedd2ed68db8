//! Container decoding for nested battery-cycle data
//!
//! A container is a JSON document with one top-level battery entity (keys
//! prefixed with `__` are loader metadata and ignored). The entity holds a
//! `cycle` collection; each cycle optionally carries a type label, ambient
//! temperature, elapsed time, and a `data` payload of named channel values.

use num_complex::Complex64;
use serde_json::Value;
use tracing::debug;

use crate::app::models::ChannelValue;
use crate::constants::{
    COMPLEX_IM_MEMBER, COMPLEX_RE_MEMBER, CYCLE_MEMBER, DATA_MEMBER, cycle_fields, is_internal_key,
};
use crate::{Error, Result};

/// One data entry: named channel values in document order
pub type DataEntry = Vec<(String, ChannelValue)>;

/// One charge/discharge/impedance cycle as recorded by the instrument
#[derive(Debug, Clone, PartialEq)]
pub struct RawCycle {
    /// Cycle type label
    pub cycle_type: ChannelValue,
    /// Ambient temperature during the cycle
    pub ambient_temperature: ChannelValue,
    /// Elapsed time for the cycle
    pub time: ChannelValue,
    /// Measurement payload; `None` when the cycle carries no `data` member
    pub data: Option<Vec<DataEntry>>,
}

/// A decoded battery container: the entity name and its cycle collection
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryContainer {
    /// Name of the top-level battery entity
    pub name: String,
    /// Cycles in container order
    pub cycles: Vec<RawCycle>,
}

impl BatteryContainer {
    /// Decode a container from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::malformed_json("container is not valid JSON", e))?;
        Self::from_value(value)
    }

    /// Decode a container from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let root = value
            .as_object()
            .ok_or_else(|| Error::malformed_input("container root is not an object"))?;

        // The battery entity is the first non-internal key in document order;
        // extra entities are ignored.
        let mut entity_keys = root.keys().filter(|k| !is_internal_key(k));
        let name = entity_keys
            .next()
            .ok_or_else(|| {
                Error::malformed_input("container has no non-internal top-level entity")
            })?
            .clone();
        for extra in entity_keys {
            debug!("Ignoring additional top-level entity '{}'", extra);
        }

        let entity = &root[&name];
        let cycle_member = entity.get(CYCLE_MEMBER).ok_or_else(|| {
            Error::malformed_input(format!(
                "battery entity '{}' has no '{}' collection",
                name, CYCLE_MEMBER
            ))
        })?;

        // A bare single cycle normalizes to a one-element collection
        let cycle_values: Vec<&Value> = match cycle_member {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        let cycles = cycle_values.iter().map(|v| decode_cycle(v)).collect();

        Ok(Self { name, cycles })
    }
}

/// Decode one cycle object; non-object cycles yield an empty cycle that the
/// extractor will skip (no `data` payload).
fn decode_cycle(value: &Value) -> RawCycle {
    let Some(obj) = value.as_object() else {
        debug!("Skipping non-object cycle entry");
        return RawCycle {
            cycle_type: ChannelValue::Missing,
            ambient_temperature: ChannelValue::Missing,
            time: ChannelValue::Missing,
            data: None,
        };
    };

    let field = |name: &str| obj.get(name).map_or(ChannelValue::Missing, channel_value);

    let data = match obj.get(DATA_MEMBER) {
        None | Some(Value::Null) => None,
        // A payload that is a collection of entries yields one row each
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(|item| item.as_object().map(decode_entry))
                .collect(),
        ),
        // A single-entry payload yields exactly one row
        Some(Value::Object(entry)) => Some(vec![decode_entry(entry)]),
        Some(other) => {
            debug!("Skipping unrepresentable data payload: {}", other);
            None
        }
    };

    RawCycle {
        cycle_type: field(cycle_fields::TYPE),
        ambient_temperature: field(cycle_fields::AMBIENT_TEMPERATURE),
        time: field(cycle_fields::TIME),
        data,
    }
}

/// Decode one data entry's named fields in document order
fn decode_entry(entry: &serde_json::Map<String, Value>) -> DataEntry {
    entry
        .iter()
        .map(|(name, value)| (name.clone(), channel_value(value)))
        .collect()
}

/// Convert a JSON value into a tagged channel value.
///
/// Objects carrying numeric `re`/`im` members decode as complex numbers;
/// any other object shape is unrepresentable and collapses to `Missing`.
pub fn channel_value(value: &Value) -> ChannelValue {
    match value {
        Value::Null => ChannelValue::Missing,
        Value::Bool(b) => ChannelValue::Number(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n
            .as_f64()
            .map_or(ChannelValue::Missing, ChannelValue::Number),
        Value::String(s) => ChannelValue::Text(s.clone()),
        Value::Array(items) => {
            ChannelValue::Sequence(items.iter().map(channel_value).collect())
        }
        Value::Object(obj) => {
            let re = obj.get(COMPLEX_RE_MEMBER).and_then(Value::as_f64);
            let im = obj.get(COMPLEX_IM_MEMBER).and_then(Value::as_f64);
            match (re, im) {
                (Some(re), Some(im)) => ChannelValue::Complex(Complex64::new(re, im)),
                _ => ChannelValue::Missing,
            }
        }
    }
}
