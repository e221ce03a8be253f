//! Connection settings for the live snapshot source.

use serde::Serialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADMIN_BIN: &str = "asadm";

/// Where and how to query the cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceConfig {
    /// Seed node the admin tool connects to
    pub host: String,
    pub port: u16,
    /// Configuration context filter (`service`, `network`, `namespace;id=<name>`, ...)
    pub context: Option<String>,
    /// Admin tool executable, looked up on `PATH` unless absolute
    pub admin_bin: String,
    /// Reverse-resolve node addresses to hostnames
    pub resolve_hosts: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            context: None,
            admin_bin: DEFAULT_ADMIN_BIN.to_string(),
            resolve_hosts: true,
        }
    }
}

impl SourceConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// An empty context is treated as no context
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_admin_bin(mut self, admin_bin: impl Into<String>) -> Self {
        self.admin_bin = admin_bin.into();
        self
    }

    pub fn with_resolve_hosts(mut self, resolve_hosts: bool) -> Self {
        self.resolve_hosts = resolve_hosts;
        self
    }

    /// The info request executed on every node
    pub fn info_command(&self) -> String {
        match &self.context {
            Some(context) => format!("asinfo -v 'get-config:context={}'", context.trim()),
            None => "asinfo -v 'get-config:'".to_string(),
        }
    }

    /// Arguments passed to the admin tool
    pub fn args(&self) -> Vec<String> {
        vec![
            "-h".to_string(),
            self.host.clone(),
            "-p".to_string(),
            self.port.to_string(),
            "-e".to_string(),
            self.info_command(),
        ]
    }

    /// `host:port` of the seed node
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
