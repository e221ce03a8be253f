//! Parser for the admin tool's `get-config` output.
//!
//! The output starts with a two-line banner. After it, every node contributes
//! a header line followed by its configuration line:
//!
//! ```text
//! Seed:        [('127.0.0.1', 3000, None)]
//! Config_file: /root/.aerospike/astools.conf
//! eu-a15:3000 (10.99.68.124) returned:
//! service-threads=8;proto-fd-max=15000
//!
//! eu-a16:3000 (10.99.68.125) returned:
//! service-threads=8;proto-fd-max=12000
//! ```
//!
//! Blank lines between nodes are ignored.

use std::net::{IpAddr, Ipv4Addr};

use cfgdrift_core::errors::{DriftError, Result};
use cfgdrift_core::model::RawNodeRecord;

use super::resolver::HostResolver;

/// Lines of banner preceding the first node header
pub const BANNER_LINES: usize = 2;

/// Split admin output into one record per node, in output order
///
/// The node id is the reverse-resolved address found in the header, or the
/// whole header when it carries no address.
///
/// # Errors
///
/// Returns [`DriftError::MalformedSourceOutput`] when a header is the last
/// line of the output.
pub fn parse_admin_output(text: &str, resolver: &dyn HostResolver) -> Result<Vec<RawNodeRecord>> {
    let mut records = Vec::new();
    let mut lines = text.lines().enumerate().skip(BANNER_LINES);

    while let Some((idx, header)) = lines.next() {
        let header = header.trim();
        if header.is_empty() {
            continue;
        }

        let (_, config_line) = lines
            .next()
            .ok_or_else(|| DriftError::MalformedSourceOutput {
                line_no: idx + 1,
                reason: format!("node header `{}` has no configuration line", header),
            })?;

        let node_id = node_id_from_header(header, resolver);
        tracing::debug!(node_id = %node_id, header, "node header parsed");
        records.push(RawNodeRecord::new(node_id, config_line.trim()));
    }

    Ok(records)
}

fn node_id_from_header(header: &str, resolver: &dyn HostResolver) -> String {
    match bracketed_address(header) {
        Some(text) => match text.parse::<Ipv4Addr>() {
            Ok(addr) => resolver.resolve(IpAddr::V4(addr)),
            // Dotted quad that is not a valid address, e.g. `999.1.1.1`
            Err(_) => text.to_string(),
        },
        None => header.to_string(),
    }
}

/// First IPv4 address enclosed in parentheses, e.g. `(10.99.68.124)`
pub fn extract_address(header: &str) -> Option<IpAddr> {
    bracketed_address(header)?
        .parse::<Ipv4Addr>()
        .ok()
        .map(IpAddr::V4)
}

/// Text of the first parenthesised group shaped like `d.d.d.d`
fn bracketed_address(header: &str) -> Option<&str> {
    header.match_indices(')').find_map(|(close, _)| {
        let head = &header[..close];
        let open = head.rfind('(')?;
        let inner = &head[open + 1..];
        is_dotted_quad(inner).then_some(inner)
    })
}

fn is_dotted_quad(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
