//! Drift report output types.
//!
//! Collections use `BTreeMap` and capture-ordered `Vec` for deterministic
//! serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator placed between per-node entries when a key report is joined
/// onto one line.
pub const ENTRY_SEPARATOR: &str = "; ";

/// The value one node reports for a divergent key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeValue {
    pub node_id: String,
    pub value: String,
}

impl NodeValue {
    pub fn new(node_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for NodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.node_id, self.value)
    }
}

/// Every node's value for one divergent key, in capture order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyReport {
    pub key: String,
    pub per_node: Vec<NodeValue>,
}

impl KeyReport {
    /// Per-node entries rendered `node = value`
    pub fn entries(&self) -> Vec<String> {
        self.per_node.iter().map(|nv| nv.to_string()).collect()
    }

    /// All entries joined onto a single line
    pub fn joined(&self) -> String {
        self.entries().join(ENTRY_SEPARATOR)
    }
}

/// The result of one drift check: divergent key → its per-node values.
///
/// An empty `keys` map means every key reported by two or more nodes had the
/// same value everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Number of nodes in the snapshot the report was built from
    pub node_count: usize,
    /// Divergent keys, ordered by name
    pub keys: BTreeMap<String, KeyReport>,
}

impl DriftReport {
    /// True if no key diverged
    pub fn is_clean(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn divergent_count(&self) -> usize {
        self.keys.len()
    }

    pub fn get(&self, key: &str) -> Option<&KeyReport> {
        self.keys.get(key)
    }
}
