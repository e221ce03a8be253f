//! Inspect command
//!
//! Usage: cfgdrift inspect <FILE|->

use clap::Args;
use std::path::PathBuf;

use cfgdrift_core::errors::ExError;
use cfgdrift_engine::{CapturedOutputSource, DnsResolver, PassthroughResolver};

use super::output::{run_and_print, OutputArgs};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Captured admin output, or `-` for stdin
    pub input: PathBuf,

    /// Show node addresses instead of reverse-resolved hostnames
    #[arg(long)]
    pub no_resolve: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute inspect command
pub fn execute(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    args.output.init_logging();

    let loaded = if args.input.as_os_str() == "-" {
        CapturedOutputSource::from_reader("stdin", std::io::stdin().lock())
    } else {
        CapturedOutputSource::from_path(&args.input)
    };
    let source = loaded.map_err(ExError::from)?;
    let source = if args.no_resolve {
        source.with_resolver(Box::new(PassthroughResolver))
    } else {
        source.with_resolver(Box::new(DnsResolver))
    };

    run_and_print(&source, &args.output)
}
