//! Predict command: the full pipeline from container to forecast

use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::app::models::RecordTable;
use crate::app::services::cycle_extractor::extract;
use crate::app::services::feature_matrix::select_features;
use crate::app::services::forecast_engine::ForecastEngine;
use crate::app::services::model_registry::{FittedModel, ModelCapability, ModelRegistry};
use crate::app::services::table_normalizer::TableNormalizer;
use crate::cli::args::PredictArgs;
use crate::constants::PROGRESS_BAR_THRESHOLD;

/// Run the predict command
pub fn run_predict(args: &PredictArgs) -> anyhow::Result<()> {
    let config = args.to_config();

    // All blocking I/O happens here, before the core pipeline runs
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("cannot read container file '{}'", args.input.display()))?;
    let registry = ModelRegistry::load_dir(&args.models_dir)
        .with_context(|| format!("cannot load models from '{}'", args.models_dir.display()))?;
    let model = registry.get(&args.model)?;

    // Extract -> normalize -> project -> forecast
    let extraction = extract(&bytes)?;
    let record_table = RecordTable::from_rows(&extraction.schema, &extraction.rows);
    let normalized = TableNormalizer::new().normalize(&record_table);
    let matrix = select_features(&normalized.table, &config.features)?;

    let engine = ForecastEngine::new(config)?;
    let progress = in_sample_progress(model, matrix.nrows(), engine.config().window_size);
    let result = engine.run(model, &matrix, progress.as_ref())?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        "Predicted {} historical values and {} forecast steps with '{}'",
        result.predicted.len(),
        result.forecast.len(),
        args.model
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "SOC Forecast".bold());
    println!(
        "  battery file:  {}",
        args.input.display().to_string().cyan()
    );
    println!(
        "  model:         {} ({})",
        args.model.cyan(),
        model.capability()
    );
    println!("  history rows:  {}", extraction.rows.len());
    println!("  predicted:     {} values", result.predicted.len());
    println!("  forecast:      {} steps", result.forecast.len());

    if !result.forecast.is_empty() {
        println!();
        println!("{}", "Forecast steps:".bold());
        for (i, value) in result.forecast.iter().enumerate() {
            println!("  t+{:<3} {:.6}", i + 1, value);
        }
    }

    Ok(())
}

/// Progress bar for the in-sample pass over large tables
fn in_sample_progress(
    model: &FittedModel,
    rows: usize,
    window_size: usize,
) -> Option<ProgressBar> {
    let total = match model.capability() {
        ModelCapability::Row => rows,
        ModelCapability::Sequence => rows.saturating_sub(window_size),
    };
    if total < PROGRESS_BAR_THRESHOLD {
        return None;
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("in-sample predictions");
    Some(pb)
}
