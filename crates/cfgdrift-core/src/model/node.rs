use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::parse::parse_config_line;

/// One `(node identifier, raw configuration line)` record as handed over by a
/// snapshot source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNodeRecord {
    pub node_id: String,
    pub config_line: String,
}

impl RawNodeRecord {
    pub fn new(node_id: impl Into<String>, config_line: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            config_line: config_line.into(),
        }
    }
}

/// Point-in-time configuration of a single cluster node
///
/// Immutable once built. Values are kept exactly as reported (after the
/// surrounding whitespace trim done by the line parser); no semantic parsing
/// of sub-lists is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    id: String,
    options: BTreeMap<String, String>,
}

impl NodeSnapshot {
    /// Build a snapshot from already-parsed options
    pub fn new(id: impl Into<String>, options: BTreeMap<String, String>) -> Self {
        Self {
            id: id.into(),
            options,
        }
    }

    /// Parse a raw `key = value; key = value` line into a snapshot
    ///
    /// # Errors
    ///
    /// - `MalformedSnapshotLine` if any pair does not split into key and value
    pub fn from_config_line(id: impl Into<String>, line: &str) -> Result<Self> {
        let id = id.into();
        let options = parse_config_line(&id, line)?;
        Ok(Self { id, options })
    }

    /// Host identifier (resolved hostname or address)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All options reported by this node, ordered by key
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Value reported for `key`, if this node reports it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|v| v.as_str())
    }

    /// Number of options reported
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True if the node reported no options at all
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl TryFrom<RawNodeRecord> for NodeSnapshot {
    type Error = crate::errors::DriftError;

    fn try_from(record: RawNodeRecord) -> Result<Self> {
        NodeSnapshot::from_config_line(record.node_id, &record.config_line)
    }
}
