//! Inspect command: extraction and normalization report without a model

use anyhow::Context;
use colored::Colorize;

use crate::app::models::{FeatureData, RecordTable};
use crate::app::services::cycle_extractor::extract;
use crate::app::services::table_normalizer::TableNormalizer;
use crate::cli::args::InspectArgs;

/// Run the inspect command
pub fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("cannot read container file '{}'", args.input.display()))?;

    let extraction = extract(&bytes)?;
    let record_table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&record_table);
    let stats = &normalized.stats;

    println!("{}", "Extraction".bold());
    println!("  cycles:            {}", extraction.stats.cycles_total);
    println!(
        "  without data:      {} ({:.1}% coverage)",
        extraction.stats.cycles_skipped,
        extraction.stats.coverage_rate()
    );
    println!("  rows emitted:      {}", extraction.stats.rows_emitted);
    println!("  channel fields:    {}", extraction.stats.fields_discovered);

    println!();
    println!("{}", "Normalization".bold());
    println!(
        "  columns:           {} -> {}",
        stats.columns_in, stats.columns_out
    );
    println!("  numeric columns:   {}", stats.numeric_columns);
    println!("  text columns:      {}", stats.text_columns);
    println!(
        "  sequences flattened: {}",
        stats.sequence_columns_flattened
    );
    println!("  cells coerced:     {}", stats.cells_coerced);
    println!("  cells repaired:    {}", stats.cells_repaired());
    println!("  cells clipped:     {}", stats.cells_clipped);
    if stats.cells_shape_degraded > 0 {
        println!(
            "  {} {}",
            "shape degraded:".yellow(),
            stats.cells_shape_degraded
        );
    }

    if args.columns {
        println!();
        println!("{}", "Columns".bold());
        for column in &normalized.table.columns {
            let kind = match column.data {
                FeatureData::Numeric(_) => "numeric",
                FeatureData::Text(_) => "text",
            };
            println!("  {:<40} {}", column.name, kind);
        }
    }

    Ok(())
}
