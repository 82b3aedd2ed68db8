//! Models command: list the served fitted models

use anyhow::Context;
use colored::Colorize;

use crate::app::services::model_registry::ModelRegistry;
use crate::cli::args::ModelsArgs;

/// Run the models command
pub fn run_models(args: &ModelsArgs) -> anyhow::Result<()> {
    let registry = ModelRegistry::load_dir(&args.models_dir)
        .with_context(|| format!("cannot load models from '{}'", args.models_dir.display()))?;

    if registry.is_empty() {
        println!(
            "No fitted models found in '{}'",
            args.models_dir.display()
        );
        return Ok(());
    }

    println!("{}", "Available models".bold());
    for (name, capability) in registry.entries() {
        println!("  {:<24} {}", name.cyan(), capability);
    }

    Ok(())
}
