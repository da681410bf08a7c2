//! Struct tag extraction.
//!
//! A field's raw tag blob uses the conventional backtick syntax
//! (`` `json:"name,omitempty" yaml:"name"` ``). Only a fixed allow-list
//! of keys is extracted; anything else in the blob is discarded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tag keys recognized by the generator.
pub const TAG_ALLOW_LIST: &[&str] = &[
    "json",
    "yaml",
    "xml",
    "gql",
    "graphql",
    "openapi",
    "description",
];

/// The recognized tag keys of one field, mapped to their raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(IndexMap<String, String>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw tag blob, keeping only allow-listed keys.
    ///
    /// Parsing is lenient: a malformed pair ends the scan and whatever was
    /// extracted before it is kept. Keys are stored in allow-list order so
    /// extraction is deterministic regardless of source order.
    pub fn parse(raw: &str) -> Self {
        let pairs = scan_pairs(raw.trim().trim_matches('`'));
        let mut map = IndexMap::new();
        for &key in TAG_ALLOW_LIST {
            if let Some((_, value)) = pairs.iter().find(|(k, _)| k == key) {
                if !value.is_empty() {
                    map.insert(key.to_string(), value.clone());
                }
            }
        }
        TagSet(map)
    }

    /// Insert a tag value directly (parser-side construction).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a tag value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The usable name carried by a tag value: its first comma-separated
    /// segment, unless that segment is empty or `-`.
    ///
    /// `json:"id,omitempty"` yields `id`; `json:"-"` and `json:",inline"`
    /// yield nothing.
    pub fn schema_name(&self, key: &str) -> Option<&str> {
        let value = self.get(key)?;
        let first = value.split(',').next().unwrap_or("");
        if first.is_empty() || first == "-" {
            None
        } else {
            Some(first)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (key, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Scan `key:"value"` pairs out of a tag blob.
fn scan_pairs(mut rest: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    loop {
        rest = rest.trim_start();
        let Some(colon) = rest.find(':') else { break };
        let key = &rest[..colon];
        if key.is_empty() || key.contains(char::is_whitespace) {
            break;
        }
        let after = &rest[colon + 1..];
        if !after.starts_with('"') {
            break;
        }
        let Some((value, tail)) = scan_quoted(&after[1..]) else {
            break;
        };
        pairs.push((key.to_string(), value));
        rest = tail;
    }
    pairs
}

/// Read a double-quoted value, honoring backslash escapes. `\n`, `\t`,
/// and `\r` decode to their control characters; any other escaped
/// character (notably `\"` and `\\`) is kept literally. Returns the
/// decoded value and the remainder after the closing quote.
fn scan_quoted(s: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &s[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => other,
                });
            }
            _ => value.push(c),
        }
    }
    None
}
