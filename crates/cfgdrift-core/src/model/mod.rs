pub mod cluster;
pub mod node;
pub mod report;

pub use cluster::ClusterSnapshot;
pub use node::{NodeSnapshot, RawNodeRecord};
pub use report::{DriftReport, KeyReport, NodeValue};
