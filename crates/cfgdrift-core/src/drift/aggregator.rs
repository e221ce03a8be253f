//! Per-key aggregation of node values.

use std::collections::BTreeSet;

use crate::errors::{DriftError, Result};
use crate::model::{ClusterSnapshot, KeyReport, NodeValue};

/// Collect every node's value for a divergent `key`, in capture order.
///
/// Nodes that do not report the key are left out. Each entry carries the value
/// exactly as the node reported it.
///
/// # Errors
///
/// - `InconsistentState` if no node reports `key`, or if every reporting node
///   agrees on its value. Either means the key did not come from
///   [`detect`](crate::drift::detect) on this cluster.
pub fn aggregate(key: &str, cluster: &ClusterSnapshot) -> Result<KeyReport> {
    let per_node: Vec<NodeValue> = cluster
        .iter()
        .filter_map(|node| node.get(key).map(|value| NodeValue::new(node.id(), value)))
        .collect();

    if per_node.is_empty() {
        return Err(DriftError::InconsistentState {
            key: key.to_string(),
            reason: format!("no node among {} reports this key", cluster.len()),
        });
    }

    let distinct: BTreeSet<&str> = per_node.iter().map(|nv| nv.value.trim()).collect();
    if distinct.len() < 2 {
        return Err(DriftError::InconsistentState {
            key: key.to_string(),
            reason: format!(
                "all {} reporting nodes agree on the value, key is not divergent",
                per_node.len()
            ),
        });
    }

    Ok(KeyReport {
        key: key.to_string(),
        per_node,
    })
}
