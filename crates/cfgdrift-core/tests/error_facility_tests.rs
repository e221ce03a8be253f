use cfgdrift_core::errors::{DriftError, ExError, ExErrorKind, OP_CAPTURE};

#[test]
fn test_malformed_line_verifiable_by_kind() {
    let err = DriftError::MalformedSnapshotLine {
        node_id: "10.0.0.7".to_string(),
        fragment: "bogus".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MalformedSnapshotLine);
    assert_eq!(ex_err.code(), "ERR_MALFORMED_SNAPSHOT_LINE");
    assert_eq!(ex_err.node_id(), Some("10.0.0.7"));
    assert!(ex_err.message().contains("bogus"));
}

#[test]
fn test_inconsistent_state_distinct_from_input_errors() {
    let err = DriftError::InconsistentState {
        key: "proto-fd-max".to_string(),
        reason: "no node among 3 reports this key".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InconsistentState);
    assert_eq!(ex_err.code(), "ERR_INCONSISTENT_STATE");
    assert_ne!(ex_err.kind(), ExErrorKind::MalformedSnapshotLine);
    assert!(!ex_err.kind().is_input_error());
    assert_eq!(ex_err.config_key(), Some("proto-fd-max"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::MalformedSnapshotLine, "ERR_MALFORMED_SNAPSHOT_LINE"),
        (ExErrorKind::MalformedSourceOutput, "ERR_MALFORMED_SOURCE_OUTPUT"),
        (ExErrorKind::InconsistentState, "ERR_INCONSISTENT_STATE"),
        (ExErrorKind::ExternalCommand, "ERR_EXTERNAL_COMMAND"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_source_output_error_is_input_error() {
    let err = DriftError::MalformedSourceOutput {
        line_no: 7,
        reason: "node header without a configuration line".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MalformedSourceOutput);
    assert!(ex_err.kind().is_input_error());
    assert!(ex_err.message().contains("line 7"));
}

#[test]
fn test_command_failed_conversion() {
    let err = DriftError::CommandFailed {
        command: "asadm".to_string(),
        status: "exit status: 1".to_string(),
        output: "ERROR: Could not connect to node 127.0.0.1".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ExternalCommand);
    assert_eq!(ex_err.op(), Some(OP_CAPTURE));
    assert!(ex_err.message().contains("`asadm` exited with exit status: 1"));
    assert!(ex_err.message().contains("Could not connect"));
    assert!(ex_err.to_string().contains("in operation 'capture'"));
}

#[test]
fn test_drift_error_display_names_the_problem() {
    let err = DriftError::MalformedSnapshotLine {
        node_id: "eu-a15".to_string(),
        fragment: "bogus".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("eu-a15"));
    assert!(text.contains("bogus"));
}

#[test]
fn test_serde_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: DriftError = json_err.into();
    assert!(matches!(err, DriftError::Serialization { .. }));
}

#[test]
fn test_duplicate_key_is_malformed_line_kind() {
    let err = DriftError::DuplicateConfigKey {
        node_id: "n1".to_string(),
        key: "a".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MalformedSnapshotLine);
    assert!(ex_err.kind().is_input_error());
    assert_eq!(ex_err.node_id(), Some("n1"));
    assert_eq!(ex_err.config_key(), Some("a"));
}
