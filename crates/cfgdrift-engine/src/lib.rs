//! cfgdrift Engine - snapshot capture and run orchestration
//!
//! Provides the I/O side of a drift check: running the cluster admin tool,
//! turning its output into per-node records, resolving node addresses, and
//! driving the pure detection pipeline of `cfgdrift-core` with boundary
//! logging around each run.

pub mod commands;
pub mod source;

pub use commands::drift_check::{run_drift_check, DriftRun};
pub use source::{
    AdminCommandSource, CapturedOutputSource, DnsResolver, HostResolver, PassthroughResolver,
    SnapshotSource, SourceConfig,
};
