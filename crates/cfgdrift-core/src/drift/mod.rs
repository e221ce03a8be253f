//! Cluster configuration drift detection.
//!
//! Compares the configuration every node reported in one snapshot and
//! produces a deterministic, node-attributed report of the keys that differ.
//!
//! ## Entry point
//!
//! ```
//! use cfgdrift_core::drift::build_report;
//! use cfgdrift_core::model::{ClusterSnapshot, RawNodeRecord};
//!
//! let cluster = ClusterSnapshot::from_records(vec![
//!     RawNodeRecord::new("node-1", "a=1;b=2"),
//!     RawNodeRecord::new("node-2", "a=1;b=3"),
//! ])
//! .unwrap();
//!
//! let report = build_report(&cluster).unwrap();
//! assert_eq!(report.keys.keys().collect::<Vec<_>>(), vec!["b"]);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: the same snapshot always yields the same report; per-key
//!   entries follow capture order.
//! - **No partial output**: any error aborts the whole report.
//! - **Single reporters are not drift**: a key only one node reports is never
//!   divergent.

pub mod aggregator;
pub mod detector;

pub use aggregator::aggregate;
pub use detector::{detect, is_divergent};

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{ClusterSnapshot, DriftReport};

/// Detect divergent keys and aggregate each of them into a [`DriftReport`].
///
/// # Errors
///
/// - `InconsistentState` if the aggregator rejects a key the detector
///   produced (a defect, never caused by input data)
pub fn build_report(cluster: &ClusterSnapshot) -> Result<DriftReport> {
    let mut keys = BTreeMap::new();

    for key in detect(cluster) {
        let report = aggregate(&key, cluster)?;
        keys.insert(key, report);
    }

    Ok(DriftReport {
        node_count: cluster.len(),
        keys,
    })
}
