//! Flags shared by every command: logging and report output.

use clap::Args;
use std::io::Write;
use terminal_size::{terminal_size, Width};

use cfgdrift_core::errors::ExError;
use cfgdrift_core::logging_facility::{init, Profile};
use cfgdrift_core::render::{render_drift_report, RenderOptions};
use cfgdrift_core_types::correlation::RunContext;
use cfgdrift_engine::{run_drift_check, DriftRun, SnapshotSource};

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output width in columns (default: terminal width, else 80)
    #[arg(long)]
    pub width: Option<u16>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl OutputArgs {
    pub fn init_logging(&self) {
        let profile = if self.log_json {
            Profile::Production
        } else if self.verbose {
            Profile::Development
        } else {
            Profile::Cli
        };
        init(profile);
    }

    pub fn render_options(&self) -> RenderOptions {
        let width = self
            .width
            .or_else(|| terminal_size().map(|(Width(w), _)| w))
            .map(usize::from);
        match width {
            Some(width) => RenderOptions::with_width(width),
            None => RenderOptions::default(),
        }
    }

    /// Print the run to stdout in the selected format
    pub fn print(&self, run: &DriftRun) -> Result<(), Box<dyn std::error::Error>> {
        let text = if self.json {
            let mut json = run.to_json().map_err(ExError::from)?;
            json.push('\n');
            json
        } else {
            render_drift_report(&run.report, &self.render_options())
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Run a drift check and print its report
pub fn run_and_print(
    source: &dyn SnapshotSource,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RunContext::new();
    let run = run_drift_check(source, &ctx)
        .map_err(|e| ExError::from(e).with_run_id(ctx.run_id.clone()))?;
    output.print(&run)
}
