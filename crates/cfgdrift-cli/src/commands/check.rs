//! Check command
//!
//! Usage: cfgdrift check [--host <HOST>] [--port <PORT>] [--context <CONTEXT>]

use clap::Args;

use cfgdrift_engine::source::config::{DEFAULT_ADMIN_BIN, DEFAULT_HOST, DEFAULT_PORT};
use cfgdrift_engine::{AdminCommandSource, SourceConfig};

use super::output::{run_and_print, OutputArgs};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Seed node host
    #[arg(long, env = "CFGDRIFT_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Seed node port
    #[arg(short, long, env = "CFGDRIFT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Config context, e.g. service, network, security, namespace;id=<name>
    #[arg(short, long, env = "CFGDRIFT_CONTEXT")]
    pub context: Option<String>,

    /// Admin tool executable
    #[arg(long, env = "CFGDRIFT_ADMIN_BIN", default_value = DEFAULT_ADMIN_BIN)]
    pub admin_bin: String,

    /// Show node addresses instead of reverse-resolved hostnames
    #[arg(long)]
    pub no_resolve: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CheckArgs {
    fn source_config(&self) -> SourceConfig {
        SourceConfig::default()
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_context(self.context.clone())
            .with_admin_bin(self.admin_bin.clone())
            .with_resolve_hosts(!self.no_resolve)
    }
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    args.output.init_logging();

    let source = AdminCommandSource::new(args.source_config());
    run_and_print(&source, &args.output)
}
