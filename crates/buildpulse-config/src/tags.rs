//! Global tag parsing.
//!
//! Global tags are configured as a single string of `key:value` entries
//! separated by commas or newlines:
//!
//! ```text
//! env:prod, team:ci
//! team:release
//! canary
//! ```
//!
//! Repeated keys accumulate values. An entry without `:` yields a key with
//! no values (emitted downstream as a bare tag).

use serde::{Deserialize, Deserializer, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from tag key to the set of values attached to it.
pub type TagSet = BTreeMap<String, BTreeSet<String>>;

/// Parse a global tag string into a [`TagSet`].
///
/// Whitespace around keys and values is trimmed, empty entries are skipped,
/// and entries with an empty key are ignored. Only the first `:` separates
/// key from value, so `url:http://ci` keeps the full value.
pub fn parse_global_tags(raw: &str) -> TagSet {
    let mut tags = TagSet::new();

    for entry in raw.split([',', '\n']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        match entry.split_once(':') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let values = tags.entry(key.to_string()).or_default();
                let value = value.trim();
                if !value.is_empty() {
                    values.insert(value.to_string());
                }
            }
            None => {
                tags.entry(entry.to_string()).or_default();
            }
        }
    }

    tags
}

/// Flatten a [`TagSet`] into a sorted list of `key:value` strings.
///
/// Keys with no values are emitted as the bare key.
pub fn flatten_tags(tags: &TagSet) -> Vec<String> {
    let mut out = Vec::new();
    for (key, values) in tags {
        if values.is_empty() {
            out.push(key.clone());
        } else {
            out.extend(values.iter().map(|value| format!("{key}:{value}")));
        }
    }
    out
}

pub(crate) fn deserialize_tags<'de, D>(deserializer: D) -> Result<TagSet, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(parse_global_tags).unwrap_or_default())
}

pub(crate) fn serialize_tags<S>(tags: &TagSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&flatten_tags(tags).join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_and_newline_separated() {
        let tags = parse_global_tags("env:prod, team:ci\nteam:release");
        assert_eq!(tags.len(), 2);
        assert!(tags["env"].contains("prod"));
        assert_eq!(tags["team"].len(), 2);
        assert!(tags["team"].contains("ci"));
        assert!(tags["team"].contains("release"));
    }

    #[test]
    fn test_parse_bare_key_and_empty_entries() {
        let tags = parse_global_tags(" canary ,, \n:orphan");
        assert_eq!(tags.len(), 1);
        assert!(tags["canary"].is_empty());
    }

    #[test]
    fn test_parse_value_keeps_extra_colons() {
        let tags = parse_global_tags("url:http://ci.example.com:8080");
        assert!(tags["url"].contains("http://ci.example.com:8080"));
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(parse_global_tags("").is_empty());
        assert!(parse_global_tags("  \n ").is_empty());
    }

    #[test]
    fn test_flatten_tags_sorted() {
        let tags = parse_global_tags("team:ci,env:prod,canary,team:alpha");
        assert_eq!(
            flatten_tags(&tags),
            vec!["canary", "env:prod", "team:alpha", "team:ci"]
        );
    }
}
