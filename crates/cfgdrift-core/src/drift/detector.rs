//! Divergent key detection.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::ClusterSnapshot;

/// Compute the set of keys whose value is not the same on every node that
/// reports them.
///
/// Values are compared as exact strings after trimming surrounding
/// whitespace. A key reported by a single node is never divergent, and an
/// empty or single-node cluster yields an empty set.
///
/// Single pass over every `(node, key, value)`: for each key the distinct
/// trimmed values are collected. A node reports each key at most once, so two
/// or more distinct values imply two or more reporting nodes that disagree.
/// The result does not depend on node order.
pub fn detect(cluster: &ClusterSnapshot) -> BTreeSet<String> {
    let mut values_by_key: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for node in cluster {
        for (key, value) in node.options() {
            values_by_key
                .entry(key.as_str())
                .or_default()
                .insert(value.trim());
        }
    }

    let divergent: BTreeSet<String> = values_by_key
        .into_iter()
        .filter(|(_, values)| values.len() > 1)
        .map(|(key, _)| key.to_string())
        .collect();

    tracing::debug!(
        node_count = cluster.len(),
        divergent_count = divergent.len(),
        "detected divergent keys"
    );

    divergent
}

/// True if `key` would be part of [`detect`]'s result for `cluster`.
pub fn is_divergent(key: &str, cluster: &ClusterSnapshot) -> bool {
    let values: BTreeSet<&str> = cluster
        .iter()
        .filter_map(|node| node.get(key))
        .map(str::trim)
        .collect();
    values.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeSnapshot;

    fn node(id: &str, line: &str) -> NodeSnapshot {
        NodeSnapshot::from_config_line(id, line).unwrap()
    }

    #[test]
    fn test_is_divergent_agrees_with_detect() {
        let cluster = ClusterSnapshot::new(vec![
            node("n1", "a=1;b=2;c=3"),
            node("n2", "a=1;b=9"),
            node("n3", "c=3"),
        ]);
        let detected = detect(&cluster);
        for key in ["a", "b", "c", "missing"] {
            assert_eq!(detected.contains(key), is_divergent(key, &cluster), "{key}");
        }
    }

    #[test]
    fn test_values_are_compared_after_trim() {
        let mut options = std::collections::BTreeMap::new();
        options.insert("a".to_string(), " 1 ".to_string());
        let cluster = ClusterSnapshot::new(vec![
            NodeSnapshot::new("n1", options),
            node("n2", "a=1"),
        ]);
        assert!(detect(&cluster).is_empty());
    }
}
