//! Run orchestration layer.
//!
//! Coordinates a snapshot source with the pure detection pipeline in
//! `cfgdrift-core`.

pub mod drift_check;
