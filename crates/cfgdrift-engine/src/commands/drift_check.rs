//! Drift check command with boundary logging.
//!
//! One call is one run: capture records from a source, build the cluster
//! snapshot, detect divergent keys and aggregate them into a report.
//! Any failure aborts the run; no partial report is returned.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for a run:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Sources and core use only `tracing::debug!()` for internal details.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cfgdrift_core::drift::build_report;
use cfgdrift_core::errors::Result;
use cfgdrift_core::model::{ClusterSnapshot, DriftReport};
use cfgdrift_core::{log_op_end, log_op_error, log_op_start};
use cfgdrift_core_types::correlation::{RunContext, RunId};

use crate::source::SnapshotSource;

pub const OP_DRIFT_CHECK: &str = "drift_check";

/// Outcome of one completed run
#[derive(Debug, Clone, Serialize)]
pub struct DriftRun {
    pub run_id: RunId,
    /// Where the records came from (`host:port` or capture file)
    pub target: String,
    /// Time the records were captured
    pub captured_at: DateTime<Utc>,
    pub report: DriftReport,
}

impl DriftRun {
    /// Render the run as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`cfgdrift_core::DriftError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run a drift check against `source`
///
/// ## Errors
///
/// - `Io` / `CommandFailed`: the source could not be read
/// - `MalformedSourceOutput`: the raw output is not header/config pairs
/// - `MalformedSnapshotLine`: a node's configuration line does not parse
/// - `InconsistentState`: aggregation contract broken
pub fn run_drift_check(source: &dyn SnapshotSource, ctx: &RunContext) -> Result<DriftRun> {
    let target = source.target();
    log_op_start!(
        OP_DRIFT_CHECK,
        run_id = ctx.run_id.as_str(),
        target = target.as_str()
    );
    let start = std::time::Instant::now();

    let result = drift_check_impl(source, ctx, target).map_err(|e| {
        log_op_error!(
            OP_DRIFT_CHECK,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = ctx.run_id.as_str()
        );
        e
    })?;

    log_op_end!(
        OP_DRIFT_CHECK,
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = ctx.run_id.as_str(),
        node_count = result.report.node_count as u64,
        divergent_count = result.report.divergent_count() as u64
    );

    Ok(result)
}

fn drift_check_impl(
    source: &dyn SnapshotSource,
    ctx: &RunContext,
    target: String,
) -> Result<DriftRun> {
    let records = source.capture()?;
    let captured_at = Utc::now();
    tracing::debug!(records = records.len(), "records captured");

    let cluster = ClusterSnapshot::from_records(records)?;
    let report = build_report(&cluster)?;

    Ok(DriftRun {
        run_id: ctx.run_id.clone(),
        target,
        captured_at,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgdrift_core::errors::DriftError;
    use cfgdrift_core::model::RawNodeRecord;

    struct StaticSource(Vec<RawNodeRecord>);

    impl SnapshotSource for StaticSource {
        fn target(&self) -> String {
            "static".to_string()
        }

        fn capture(&self) -> Result<Vec<RawNodeRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_run_carries_context_run_id() {
        let source = StaticSource(vec![
            RawNodeRecord::new("n1", "a=1"),
            RawNodeRecord::new("n2", "a=2"),
        ]);
        let ctx = RunContext::new();
        let run = run_drift_check(&source, &ctx).unwrap();

        assert_eq!(run.run_id, ctx.run_id);
        assert_eq!(run.target, "static");
        assert_eq!(run.report.divergent_count(), 1);
    }

    #[test]
    fn test_empty_source_gives_clean_report() {
        let source = StaticSource(vec![]);
        let run = run_drift_check(&source, &RunContext::new()).unwrap();
        assert_eq!(run.target, "static");
        assert!(run.report.is_clean());
    }

    #[test]
    fn test_malformed_line_aborts_run() {
        let source = StaticSource(vec![RawNodeRecord::new("n1", "bogus")]);
        let err = run_drift_check(&source, &RunContext::new()).unwrap_err();
        assert!(matches!(err, DriftError::MalformedSnapshotLine { .. }));
    }

    #[test]
    fn test_json_contains_run_metadata() {
        let source = StaticSource(vec![
            RawNodeRecord::new("n1", "a=1"),
            RawNodeRecord::new("n2", "a=2"),
        ]);
        let run = run_drift_check(&source, &RunContext::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&run.to_json().unwrap()).unwrap();

        assert_eq!(value["run_id"], run.run_id.as_str());
        assert_eq!(value["report"]["node_count"], 2);
        assert!(value["captured_at"].is_string());
    }
}
