//! Delimited key-value text parsing.
//!
//! Interprets semi-structured status output (one `key <sep> value` pair
//! per line) into a grouped mapping. The assignment pattern is supplied by
//! the caller; lines that do not match are skipped rather than rejected,
//! since OS status files routinely mix headers and blank lines into
//! otherwise regular output.

use regex::Regex;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Parser configuration: an assignment pattern with two capture groups
/// (key, value) and the repeated-key policy.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    assignment: Regex,
    multiple_values: bool,
}

impl ParseOptions {
    pub fn new(assignment: Regex) -> Self {
        Self {
            assignment,
            multiple_values: false,
        }
    }

    /// Accumulate repeated keys into an ordered list instead of letting
    /// the last occurrence win.
    pub fn multiple_values(mut self, enabled: bool) -> Self {
        self.multiple_values = enabled;
        self
    }
}

/// A parsed value: scalar until the same key recurs, a list afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    Many(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Single(v) => Some(v),
            Value::Many(_) => None,
        }
    }

    /// All collected values, in encounter order. A scalar yields one.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Value::Single(v) => vec![v.as_str()],
            Value::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.values().iter().any(|v| *v == needle)
    }
}

/// Grouped mapping produced by [`parse`].
pub type ParsedConfig = BTreeMap<String, Value>;

/// Parse `text` line by line. Pure function of its inputs; empty input
/// yields an empty mapping.
pub fn parse(text: &str, options: &ParseOptions) -> ParsedConfig {
    let mut params = ParsedConfig::new();
    for line in text.lines() {
        let Some(caps) = options.assignment.captures(line) else {
            continue;
        };
        let key = caps.get(1).map_or("", |m| m.as_str()).trim();
        let value = caps.get(2).map_or("", |m| m.as_str()).trim();

        if !options.multiple_values {
            params.insert(key.to_string(), Value::Single(value.to_string()));
            continue;
        }

        match params.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Value::Single(value.to_string()));
            }
            Entry::Occupied(mut slot) => {
                let stored = slot.get_mut();
                match stored {
                    Value::Single(first) => {
                        let first = std::mem::take(first);
                        *stored = Value::Many(vec![first, value.to_string()]);
                    }
                    Value::Many(list) => list.push(value.to_string()),
                }
            }
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colon_options() -> ParseOptions {
        ParseOptions::new(Regex::new(r"^\s*([^:]*?)\s*:\s*(.*?)\s*$").unwrap())
    }

    #[test]
    fn repeated_key_accumulates_in_order() {
        let options = colon_options().multiple_values(true);
        let params = parse("key: value1\nkey: value2\n", &options);
        assert_eq!(
            params.get("key"),
            Some(&Value::Many(vec!["value1".into(), "value2".into()]))
        );
    }

    #[test]
    fn repeated_key_overwrites_without_multiple_values() {
        let options = colon_options();
        let params = parse("key: value1\nkey: value2\n", &options);
        assert_eq!(params.get("key"), Some(&Value::Single("value2".into())));
    }

    #[test]
    fn third_occurrence_appends() {
        let options = colon_options().multiple_values(true);
        let params = parse("k: a\nk: b\nk: c\n", &options);
        assert_eq!(
            params.get("k"),
            Some(&Value::Many(vec!["a".into(), "b".into(), "c".into()]))
        );
    }

    #[test]
    fn non_matching_lines_are_skipped() {
        let options = ParseOptions::new(Regex::new(r"^(\w+)=(\w+)$").unwrap());
        let params = parse("# comment\nfoo=bar\n\ngarbage line\n", &options);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("foo"), Some(&Value::Single("bar".into())));
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        let params = parse("", &colon_options());
        assert!(params.is_empty());
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let options = ParseOptions::new(Regex::new(r"^([^=]*)=(.*)$").unwrap());
        let params = parse("  spaced key  =  spaced value  ", &options);
        assert_eq!(
            params.get("spaced key"),
            Some(&Value::Single("spaced value".into()))
        );
    }

    #[test]
    fn value_helpers() {
        let single = Value::Single("eth0".into());
        assert_eq!(single.as_str(), Some("eth0"));
        assert!(single.contains("eth0"));

        let many = Value::Many(vec!["eth0".into(), "eth1".into()]);
        assert_eq!(many.as_str(), None);
        assert_eq!(many.values(), vec!["eth0", "eth1"]);
        assert!(many.contains("eth1"));
        assert!(!many.contains("eth2"));
    }
}
