//! Front matter values
//!
//! The YAML parser produces loosely typed `serde_yaml::Value`s. This module
//! folds them into a closed set of shapes the normalizer can match on
//! exhaustively, and keeps top-level keys in document order.

use crate::error::{MatterFmtError, Result, UNKNOWN_PATH};
use std::fmt;

/// A front matter value reduced to the shapes the normalizer renders
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatterValue {
    /// Explicit `~`/`null` or an empty value
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
    Sequence(Vec<FrontMatterValue>),
    /// Nested map with its values flattened to plain text
    Mapping(Vec<(String, String)>),
}

impl FrontMatterValue {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a single-entry mapping such as `{image: cover.png}`
    pub fn single_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Mapping(vec![(key.into(), value.into())])
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to borrow as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Plain textual representation, as used for unquoted output.
    ///
    /// Sequences and mappings use YAML flow style. Items that would not
    /// read back as the same scalar are double-quoted, and null items are
    /// written as `~`.
    pub fn to_plain_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FrontMatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item {
                        Self::Null => f.write_str("~")?,
                        Self::String(s) => f.write_str(&flow_scalar(s))?,
                        other => write!(f, "{}", other)?,
                    }
                }
                f.write_str("]")
            }
            Self::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", flow_scalar(k), flow_scalar(v))?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Double-quote `s`, escaping backslashes, quotes and control characters
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `s` written bare inside a flow collection reads back as `s`
fn is_plain_flow_safe(s: &str) -> bool {
    if s.is_empty() || s.trim() != s {
        return false;
    }
    if s.starts_with(|c: char| "-?!&*|>%@`".contains(c)) {
        return false;
    }
    if s.chars().any(|c| {
        matches!(c, ',' | ':' | '[' | ']' | '{' | '}' | '#' | '"' | '\'') || c.is_control()
    }) {
        return false;
    }
    matches!(
        serde_yaml::from_str::<serde_yaml::Value>(s),
        Ok(serde_yaml::Value::String(ref parsed)) if parsed == s
    )
}

/// A string as it must appear inside `[...]` or `{...}`
fn flow_scalar(s: &str) -> String {
    if is_plain_flow_safe(s) {
        s.to_string()
    } else {
        quote(s)
    }
}

impl From<serde_yaml::Value> for FrontMatterValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Self::Null,
            serde_yaml::Value::Bool(b) => Self::Bool(b),
            serde_yaml::Value::Number(n) => Self::Number(n),
            serde_yaml::Value::String(s) => Self::String(s),
            serde_yaml::Value::Sequence(seq) => {
                Self::Sequence(seq.into_iter().map(Self::from).collect())
            }
            serde_yaml::Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (key_text(k), Self::from(v).to_plain_text()))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<&str> for FrontMatterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

fn key_text(key: serde_yaml::Value) -> String {
    FrontMatterValue::from(key).to_plain_text()
}

/// Top-level front matter mapping, kept in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    entries: Vec<(String, FrontMatterValue)>,
}

impl FrontMatter {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document into a front matter mapping.
    ///
    /// Empty input and an explicit `null` document give an empty mapping.
    /// Anything other than a mapping at the top level is rejected.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::new());
        }

        let value: serde_yaml::Value = serde_yaml::from_str(source)
            .map_err(|e| MatterFmtError::malformed_front_matter(UNKNOWN_PATH, e.to_string()))?;

        match value {
            serde_yaml::Value::Mapping(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (key_text(k), FrontMatterValue::from(v)))
                .collect()),
            serde_yaml::Value::Null => Ok(Self::new()),
            other => Err(MatterFmtError::malformed_front_matter(
                UNKNOWN_PATH,
                format!("expected a mapping, found {}", describe(&other)),
            )),
        }
    }

    /// Insert or replace a value, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, value: FrontMatterValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over entries in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, FrontMatterValue)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (String, FrontMatterValue)>>(iter: I) -> Self {
        let mut fm = Self::new();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
