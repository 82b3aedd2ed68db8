//! Command implementations for the SOC forecaster CLI
//!
//! This is the boundary layer: it performs all blocking I/O (reading the
//! container file, loading fitted models), invokes the synchronous core
//! pipeline, and renders typed core errors as user-facing messages.

pub mod inspect;
pub mod models;
pub mod predict;

use crate::cli::args::{Args, Commands};

/// Main command dispatcher for the SOC forecaster
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::Predict(predict_args)) => predict::run_predict(&predict_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(&inspect_args),
        Some(Commands::Models(models_args)) => models::run_models(&models_args),
        None => unreachable!("main shows help when no command is given"),
    }
}
