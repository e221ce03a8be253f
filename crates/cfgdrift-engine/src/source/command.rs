//! Live snapshot source running the cluster admin tool.

use std::process::Command;

use cfgdrift_core::errors::{DriftError, Result};
use cfgdrift_core::model::RawNodeRecord;

use super::admin_output::parse_admin_output;
use super::config::SourceConfig;
use super::resolver::{resolver_for, HostResolver};
use super::SnapshotSource;

/// Runs `<admin_bin> -h <host> -p <port> -e "asinfo -v 'get-config:...'"`
pub struct AdminCommandSource {
    config: SourceConfig,
    resolver: Box<dyn HostResolver>,
}

impl AdminCommandSource {
    pub fn new(config: SourceConfig) -> Self {
        let resolver = resolver_for(&config);
        Self { config, resolver }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn run(&self) -> Result<String> {
        let args = self.config.args();
        tracing::debug!(bin = %self.config.admin_bin, args = ?args, "running admin command");

        let output = Command::new(&self.config.admin_bin)
            .args(&args)
            .output()
            .map_err(|e| DriftError::Io {
                message: format!("failed to run `{}`: {}", self.config.admin_bin, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let text = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(DriftError::CommandFailed {
                command: self.config.admin_bin.clone(),
                status: output.status.to_string(),
                output: text.trim().to_string(),
            });
        }

        tracing::debug!(bytes = output.stdout.len(), "admin command finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SnapshotSource for AdminCommandSource {
    fn target(&self) -> String {
        self.config.target()
    }

    fn capture(&self) -> Result<Vec<RawNodeRecord>> {
        let text = self.run()?;
        parse_admin_output(&text, self.resolver.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_io_error() {
        let config = SourceConfig::default().with_admin_bin("/nonexistent/cfgdrift/asadm");
        let err = AdminCommandSource::new(config).capture().unwrap_err();
        assert!(matches!(err, DriftError::Io { ref message } if message.contains("/nonexistent/cfgdrift/asadm")));
    }

    #[test]
    fn test_target_is_seed_node() {
        let source = AdminCommandSource::new(SourceConfig::default().with_port(3100));
        assert_eq!(source.target(), "127.0.0.1:3100");
    }
}
