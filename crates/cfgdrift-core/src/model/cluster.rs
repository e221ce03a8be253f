use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::node::{NodeSnapshot, RawNodeRecord};

/// Configuration of every node captured in one run, in capture order
///
/// The node order is the order the snapshot source emitted the nodes in and
/// is preserved by every report built from this snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    nodes: Vec<NodeSnapshot>,
}

impl ClusterSnapshot {
    pub fn new(nodes: Vec<NodeSnapshot>) -> Self {
        Self { nodes }
    }

    /// Parse every record into a node snapshot
    ///
    /// Parsing stops at the first malformed line; no partial cluster is
    /// returned.
    ///
    /// # Errors
    ///
    /// - `MalformedSnapshotLine` for the first record that fails to parse
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawNodeRecord>,
    {
        let nodes = records
            .into_iter()
            .map(NodeSnapshot::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[NodeSnapshot] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeSnapshot> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a ClusterSnapshot {
    type Item = &'a NodeSnapshot;
    type IntoIter = std::slice::Iter<'a, NodeSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
