//! Node address to node id resolution.

use std::net::IpAddr;

use super::config::SourceConfig;

/// Maps a node address to the id shown in reports
pub trait HostResolver {
    /// Resolve `addr`; never fails, unresolvable addresses map to themselves
    fn resolve(&self, addr: IpAddr) -> String;
}

/// Reverse DNS lookup, falling back to the address text
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl HostResolver for DnsResolver {
    fn resolve(&self, addr: IpAddr) -> String {
        match dns_lookup::lookup_addr(&addr) {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => addr.to_string(),
            Err(err) => {
                tracing::debug!(addr = %addr, error = %err, "reverse lookup failed, using address");
                addr.to_string()
            }
        }
    }
}

/// Uses the address text as the node id
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl HostResolver for PassthroughResolver {
    fn resolve(&self, addr: IpAddr) -> String {
        addr.to_string()
    }
}

/// Resolver matching the config's `resolve_hosts` switch
pub fn resolver_for(config: &SourceConfig) -> Box<dyn HostResolver> {
    if config.resolve_hosts {
        Box::new(DnsResolver)
    } else {
        Box::new(PassthroughResolver)
    }
}
