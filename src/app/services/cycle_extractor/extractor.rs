//! Schema discovery and measurement row emission
//!
//! Converts a decoded [`BatteryContainer`] into the ordered sequence of
//! flattened [`MeasurementRow`] records the normalizer consumes. A first
//! pass collects the union of channel field names across all data entries;
//! rows are then built against that fixed schema with `Missing` for absent
//! fields.

use tracing::{debug, info};

use super::container::BatteryContainer;
use super::stats::ExtractionStats;
use crate::Result;
use crate::app::models::{ChannelValue, MeasurementRow, RecordSchema};

/// Extraction output: the discovered schema, the ordered rows, and counters
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Union of channel field names in first-seen order
    pub schema: RecordSchema,
    /// One row per data entry, in container order
    pub rows: Vec<MeasurementRow>,
    /// Extraction statistics
    pub stats: ExtractionStats,
}

/// Decode a container from raw bytes and extract its measurement rows
pub fn extract(bytes: &[u8]) -> Result<ExtractionResult> {
    let container = BatteryContainer::from_slice(bytes)?;
    Ok(extract_records(&container))
}

/// Extract the flattened measurement rows from a decoded container.
///
/// Cycles without a `data` payload are skipped entirely. Extraction itself
/// never fails; structural problems are caught while decoding the container.
pub fn extract_records(container: &BatteryContainer) -> ExtractionResult {
    let mut stats = ExtractionStats::new();
    stats.cycles_total = container.cycles.len();

    // Pass 1: discover the channel schema across all entries
    let mut schema = RecordSchema::default();
    for cycle in &container.cycles {
        let Some(entries) = &cycle.data else { continue };
        for entry in entries {
            for (field, _) in entry {
                schema.register(field);
            }
        }
    }
    stats.fields_discovered = schema.len();

    // Pass 2: emit one row per entry against the fixed schema
    let mut rows = Vec::new();
    for (cycle_index, cycle) in container.cycles.iter().enumerate() {
        let Some(entries) = &cycle.data else {
            debug!("Cycle {} has no data payload, skipping", cycle_index);
            stats.cycles_skipped += 1;
            continue;
        };

        for entry in entries {
            let channels = schema
                .channel_fields
                .iter()
                .map(|field| {
                    entry
                        .iter()
                        .find(|(name, _)| name == field)
                        .map(|(_, value)| value.clone())
                        .unwrap_or(ChannelValue::Missing)
                })
                .collect();

            rows.push(MeasurementRow {
                cycle_index,
                cycle_type: cycle.cycle_type.clone(),
                ambient_temperature: cycle.ambient_temperature.clone(),
                time: cycle.time.clone(),
                channels,
            });
        }
    }
    stats.rows_emitted = rows.len();

    info!(
        "Extracted {} rows from battery '{}': {} cycles ({} without data), {} channel fields",
        rows.len(),
        container.name,
        stats.cycles_total,
        stats.cycles_skipped,
        stats.fields_discovered
    );

    ExtractionResult {
        schema,
        rows,
        stats,
    }
}
