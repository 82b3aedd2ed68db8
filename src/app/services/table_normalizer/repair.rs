//! Per-column repair and tagging
//!
//! Decides each column's variant exactly once and repairs its cells so that
//! later stages can branch on the tag instead of re-probing value types.
//!
//! A column is numeric when every present cell is a scalar number; such
//! columns are coerced, linearly interpolated over interior gaps, and
//! forward/backward-filled at the boundaries. Every other column is repaired
//! cell-wise into sequences or scalar strings, then tagged sequence-valued
//! or text by its first row.

use tracing::debug;

use super::stats::NormalizeStats;
use crate::app::models::{ChannelValue, RecordColumn, RecordTable};

/// Payload of one repaired column
#[derive(Debug, Clone, PartialEq)]
pub enum RepairedData {
    /// Scalar numeric values; NaN only when the whole column was missing
    Numeric(Vec<f64>),
    /// Uniform numeric sequences (complex elements resolved to magnitudes)
    Sequence(Vec<Vec<f64>>),
    /// Scalar strings
    Text(Vec<String>),
}

/// A named repaired column
#[derive(Debug, Clone, PartialEq)]
pub struct RepairedColumn {
    pub name: String,
    pub data: RepairedData,
}

/// Repair every column of the record table
pub fn repair_columns(table: &RecordTable, stats: &mut NormalizeStats) -> Vec<RepairedColumn> {
    table
        .columns
        .iter()
        .map(|column| repair_column(column, stats))
        .collect()
}

fn repair_column(column: &RecordColumn, stats: &mut NormalizeStats) -> RepairedColumn {
    let data = if is_numeric_column(&column.cells) {
        RepairedData::Numeric(repair_numeric(&column.cells, stats))
    } else {
        repair_object(&column.name, &column.cells, stats)
    };

    RepairedColumn {
        name: column.name.clone(),
        data,
    }
}

/// A column is numeric when it has at least one present value and every
/// present value is a scalar number.
fn is_numeric_column(cells: &[ChannelValue]) -> bool {
    let mut any_present = false;
    for cell in cells {
        match cell {
            ChannelValue::Number(_) => any_present = true,
            ChannelValue::Missing => {}
            _ => return false,
        }
    }
    any_present
}

/// Repair a numeric column: coerce non-numbers to missing, interpolate
/// interior gaps linearly by row order, then forward- and backward-fill the
/// boundaries. A column with no present values stays all-NaN for the
/// backfill stage to resolve.
fn repair_numeric(cells: &[ChannelValue], stats: &mut NormalizeStats) -> Vec<f64> {
    let mut values: Vec<Option<f64>> = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell.as_number() {
            Some(n) if n.is_finite() => values.push(Some(n)),
            Some(_) => {
                stats.cells_coerced += 1;
                values.push(None);
            }
            None => {
                if !cell.is_missing() {
                    stats.cells_coerced += 1;
                }
                values.push(None);
            }
        }
    }

    interpolate_linear(&mut values, stats);
    fill_forward_backward(&mut values, stats);

    values
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect()
}

/// Fill interior gaps between two present values by linear interpolation
/// over row positions.
fn interpolate_linear(values: &mut [Option<f64>], stats: &mut NormalizeStats) {
    let mut prev_present: Option<usize> = None;
    let mut i = 0;
    while i < values.len() {
        if values[i].is_some() {
            prev_present = Some(i);
            i += 1;
            continue;
        }

        // Find the end of this gap
        let gap_start = i;
        while i < values.len() && values[i].is_none() {
            i += 1;
        }

        // Interior gap only: a present value on both sides
        if let (Some(left), true) = (prev_present, i < values.len()) {
            let right = i;
            let a = values[left].unwrap();
            let b = values[right].unwrap();
            let span = (right - left) as f64;
            for k in gap_start..right {
                let frac = (k - left) as f64 / span;
                values[k] = Some(a + (b - a) * frac);
                stats.cells_interpolated += 1;
            }
        }
    }
}

/// Forward-fill then backward-fill boundary gaps
fn fill_forward_backward(values: &mut [Option<f64>], stats: &mut NormalizeStats) {
    let mut last = None;
    for value in values.iter_mut() {
        match value {
            Some(v) => last = Some(*v),
            None => {
                if let Some(v) = last {
                    *value = Some(v);
                    stats.cells_interpolated += 1;
                }
            }
        }
    }

    let mut next = None;
    for value in values.iter_mut().rev() {
        match value {
            Some(v) => next = Some(*v),
            None => {
                if let Some(v) = next {
                    *value = Some(v);
                    stats.cells_interpolated += 1;
                }
            }
        }
    }
}

/// Intermediate repaired object cell: sequence or scalar string
enum ObjectCell {
    Seq(Vec<f64>),
    Text(String),
}

/// Repair a non-numeric column and tag it by its first row.
///
/// Cells repair to either a numeric sequence or a scalar string:
/// missing/blank values and unrepresentable scalars become empty sequences,
/// list values resolve complex elements to magnitudes, non-empty strings
/// stay scalar. The first row's shape then fixes the column tag; cells of
/// the other shape degrade to that tag's empty value.
fn repair_object(name: &str, cells: &[ChannelValue], stats: &mut NormalizeStats) -> RepairedData {
    let repaired: Vec<ObjectCell> = cells.iter().map(|c| repair_object_cell(c, stats)).collect();

    let sequence_valued = matches!(repaired.first(), Some(ObjectCell::Seq(_)));
    if sequence_valued {
        let columns = repaired
            .into_iter()
            .map(|cell| match cell {
                ObjectCell::Seq(seq) => seq,
                ObjectCell::Text(_) => {
                    stats.cells_shape_degraded += 1;
                    debug!("Text cell in sequence-valued column '{}' degraded", name);
                    Vec::new()
                }
            })
            .collect();
        RepairedData::Sequence(columns)
    } else {
        let columns = repaired
            .into_iter()
            .map(|cell| match cell {
                ObjectCell::Text(text) => text,
                ObjectCell::Seq(_) => {
                    stats.cells_shape_degraded += 1;
                    debug!("Sequence cell in text column '{}' degraded", name);
                    String::new()
                }
            })
            .collect();
        RepairedData::Text(columns)
    }
}

fn repair_object_cell(cell: &ChannelValue, stats: &mut NormalizeStats) -> ObjectCell {
    match cell {
        ChannelValue::Missing => ObjectCell::Seq(Vec::new()),
        ChannelValue::Sequence(items) => {
            let mut seq = Vec::with_capacity(items.len());
            for item in items {
                match item.element_magnitude() {
                    Some(v) => seq.push(v),
                    None => stats.elements_dropped += 1,
                }
            }
            ObjectCell::Seq(seq)
        }
        ChannelValue::Text(s) => {
            if s.trim().is_empty() {
                ObjectCell::Seq(Vec::new())
            } else {
                ObjectCell::Text(s.clone())
            }
        }
        // Scalar numbers and complex values in an object column collapse
        // to empty sequences
        _ => ObjectCell::Seq(Vec::new()),
    }
}
