//! cfgdrift CLI
//!
//! Command-line interface for cluster configuration drift detection

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cfgdrift")]
#[command(
    about = "cfgdrift - report configuration keys whose values differ across cluster nodes",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Query a live cluster through the admin tool
    Check(commands::check::CheckArgs),
    /// Analyze previously captured admin output
    Inspect(commands::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
