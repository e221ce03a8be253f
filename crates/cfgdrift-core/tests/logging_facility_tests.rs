#![allow(clippy::unwrap_used, clippy::expect_used)]

use cfgdrift_core::errors::{DriftError, ExErrorKind};
use cfgdrift_core::logging_facility::test_capture::init_test_capture;
use cfgdrift_core::{log_op_end, log_op_error, log_op_start};
use cfgdrift_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let starts = capture.count_events(|e| e.is(op_name, EVENT_START));
    assert_eq!(starts, 1, "Should have captured exactly one start event");
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = DriftError::InconsistentState {
        key: "a".to_string(),
        reason: "no node reports this key".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.field("err.code"), Some("ERR_INCONSISTENT_STATE"));
    assert_eq!(
        error_event.field("err.kind"),
        Some(format!("{:?}", ExErrorKind::InconsistentState).as_str())
    );
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, node_count = 3u64, context = "service");

    let events = capture.events_for_op(op_name);
    let start_event = events.first().expect("Should have start event");

    assert_eq!(start_event.field("node_count"), Some("3"));
    assert_eq!(start_event.field("context"), Some("service"));
}

#[test]
fn test_run_id_is_captured() {
    let capture = init_test_capture();
    let op_name = "test_run_id_capture_unique_5";

    log_op_start!(op_name, run_id = "run-under-test-5");

    let events = capture.events_for_run("run-under-test-5");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].op.as_deref(), Some(op_name));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails_for_unknown_op() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_6";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1, divergent_count = 2u64);

    assert_eq!(capture.count_events(|e| e.is(op_name, EVENT_START)), 1);
    assert_eq!(capture.count_events(|e| e.is(op_name, EVENT_END)), 1);
    capture.assert_event_exists(op_name, EVENT_END);
}
