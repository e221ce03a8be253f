//! Configuration line parsing.
//!
//! A node's configuration arrives as one line of `;`-separated `key = value`
//! pairs, e.g. `proto-fd-max=15000;service-threads=8`.

use std::collections::BTreeMap;

use crate::errors::{DriftError, Result};

/// Separator between pairs on a configuration line
pub const PAIR_SEPARATOR: char = ';';

/// Separator between key and value inside a pair
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Parse one node's configuration line into a key → value map.
///
/// Whitespace around each pair and around `=` is trimmed.
///
/// # Errors
///
/// - `MalformedSnapshotLine` if a pair does not split into exactly two parts on
///   `=`, or its key is empty. An empty line is a single empty pair and is
///   therefore malformed too.
/// - `DuplicateConfigKey` if a key occurs more than once on the line, since a
///   node can hold only one value per key.
pub fn parse_config_line(node_id: &str, line: &str) -> Result<BTreeMap<String, String>> {
    let mut options = BTreeMap::new();

    for pair in line.split(PAIR_SEPARATOR) {
        let (key, value) = split_pair(pair).ok_or_else(|| DriftError::MalformedSnapshotLine {
            node_id: node_id.to_string(),
            fragment: pair.trim().to_string(),
        })?;

        if options.insert(key.to_string(), value.to_string()).is_some() {
            return Err(DriftError::DuplicateConfigKey {
                node_id: node_id.to_string(),
                key: key.to_string(),
            });
        }
    }

    Ok(options)
}

/// Split `key = value` into its trimmed halves.
fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let mut parts = pair.split(KEY_VALUE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) if !key.trim().is_empty() => {
            Some((key.trim(), value.trim()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pair_trims_both_sides() {
        assert_eq!(split_pair("  x =  1 "), Some(("x", "1")));
    }

    #[test]
    fn test_split_pair_allows_empty_value() {
        assert_eq!(split_pair("cluster-name="), Some(("cluster-name", "")));
    }

    #[test]
    fn test_split_pair_rejects_missing_and_extra_separators() {
        assert_eq!(split_pair("bogus"), None);
        assert_eq!(split_pair("a=b=c"), None);
        assert_eq!(split_pair("a==b"), None);
        assert_eq!(split_pair(" = 1"), None);
    }

    #[test]
    fn test_repeated_key_is_rejected() {
        let err = parse_config_line("n1", "a=1;b=2; a = 1").unwrap_err();
        assert_eq!(
            err,
            DriftError::DuplicateConfigKey {
                node_id: "n1".to_string(),
                key: "a".to_string(),
            }
        );
    }
}
