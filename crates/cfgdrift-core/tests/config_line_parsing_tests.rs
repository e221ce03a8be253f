use cfgdrift_core::errors::DriftError;
use cfgdrift_core::model::NodeSnapshot;
use cfgdrift_core::parse::parse_config_line;

fn malformed(node: &str, fragment: &str) -> DriftError {
    DriftError::MalformedSnapshotLine {
        node_id: node.to_string(),
        fragment: fragment.to_string(),
    }
}

#[test]
fn test_whitespace_is_insignificant() {
    let spaced = parse_config_line("n1", "x = 1").unwrap();
    let tight = parse_config_line("n1", "x=1").unwrap();
    assert_eq!(spaced, tight);
    assert_eq!(tight.get("x").map(String::as_str), Some("1"));
}

#[test]
fn test_parses_service_context_line() {
    let line = "service-threads=8;proto-fd-max=15000;cluster-name=prod;migrate-threads=1";
    let options = parse_config_line("10.0.0.1", line).unwrap();

    assert_eq!(options.len(), 4);
    assert_eq!(options["proto-fd-max"], "15000");
    assert_eq!(options["cluster-name"], "prod");
}

#[test]
fn test_whitespace_around_pairs_is_trimmed() {
    let options = parse_config_line("n1", "  a = 1 ;   b=2  ").unwrap();
    assert_eq!(options["a"], "1");
    assert_eq!(options["b"], "2");
}

#[test]
fn test_value_may_be_empty() {
    let options = parse_config_line("n1", "cluster-name=;a=1").unwrap();
    assert_eq!(options["cluster-name"], "");
}

#[test]
fn test_pair_without_equals_is_malformed() {
    let err = parse_config_line("n1", "a=1;bogus").unwrap_err();
    assert_eq!(err, malformed("n1", "bogus"));
}

#[test]
fn test_pair_with_two_equals_is_malformed() {
    let err = parse_config_line("n1", "a=1;b=2=3").unwrap_err();
    assert_eq!(err, malformed("n1", "b=2=3"));
}

#[test]
fn test_empty_line_is_malformed() {
    let err = parse_config_line("n1", "").unwrap_err();
    assert_eq!(err, malformed("n1", ""));
}

#[test]
fn test_trailing_separator_is_malformed() {
    let err = parse_config_line("n1", "a=1;").unwrap_err();
    assert_eq!(err, malformed("n1", ""));
}

#[test]
fn test_empty_key_is_malformed() {
    let err = parse_config_line("n1", "=1").unwrap_err();
    assert_eq!(err, malformed("n1", "=1"));
}

#[test]
fn test_node_snapshot_from_config_line() {
    let node = NodeSnapshot::from_config_line("eu-a15", "a = 1; b = two").unwrap();
    assert_eq!(node.id(), "eu-a15");
    assert_eq!(node.get("a"), Some("1"));
    assert_eq!(node.get("b"), Some("two"));
    assert_eq!(node.get("c"), None);
    assert_eq!(node.len(), 2);
}
