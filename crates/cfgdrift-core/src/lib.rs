//! cfgdrift Core - cluster configuration drift detection
//!
//! This crate provides the pure, synchronous part of a drift check:
//! - Node and cluster configuration snapshots
//! - Parsing of `key = value; ...` configuration lines
//! - Divergent key detection and per-key aggregation into a report
//! - Terminal rendering of the report
//! - The error facility and structured logging facility shared by the workspace
//!
//! Nothing here performs I/O; snapshots are produced by `cfgdrift-engine`.

pub mod drift;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use drift::{aggregate, build_report, detect};
pub use errors::{DriftError, ExError, ExErrorKind, Result};
pub use model::{ClusterSnapshot, DriftReport, KeyReport, NodeSnapshot, NodeValue, RawNodeRecord};
pub use render::{render_drift_report, RenderOptions};
