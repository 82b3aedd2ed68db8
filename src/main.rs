use clap::Parser;
use soc_forecaster::cli::{args::Args, commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    init_tracing(args.verbose);

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Initialize the tracing subscriber from the verbosity flags.
/// RUST_LOG overrides the flag-derived level when set.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("soc_forecaster={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SOC Forecaster - Battery State-of-Charge Prediction");
    println!("===================================================");
    println!();
    println!("Normalize nested battery-cycle measurement containers and forecast");
    println!("state-of-charge with fitted regression and sequence models.");
    println!();
    println!("USAGE:");
    println!("    soc-forecaster <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    predict     Run the full pipeline and forecast SOC (main command)");
    println!("    inspect     Report extraction and normalization statistics");
    println!("    models      List the fitted models in a models directory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase logging verbosity");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Forecast 5 steps ahead with a fitted random forest:");
    println!("    soc-forecaster predict --input B0005.json --model RandomForest");
    println!();
    println!("    # Forecast with the LSTM sequence model, JSON output:");
    println!("    soc-forecaster predict --input B0005.json --model LSTM \\");
    println!("                           --future-steps 10 --json");
    println!();
    println!("    # Inspect normalization of a container without predicting:");
    println!("    soc-forecaster inspect --input B0005.json --columns");
    println!();
    println!("For detailed help on any command, use:");
    println!("    soc-forecaster <COMMAND> --help");
}
