//! Structured key/value fields
//!
//! Call sites pass fields as a flat slice alternating keys and values,
//! rendered with `Display`. Only complete pairs count: a trailing key
//! without a value is dropped.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Flat key/value arguments: `&[&"user", &42, &"action", &"login"]`
pub type KeyValues<'a> = &'a [&'a dyn fmt::Display];

/// Iterate the complete `(key, value)` pairs of `kv`, skipping an unpaired
/// final element
pub fn pairs<'a>(
    kv: KeyValues<'a>,
) -> impl Iterator<Item = (&'a dyn fmt::Display, &'a dyn fmt::Display)> + 'a {
    kv.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}

/// Ordered structured fields attached to a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    fields: Vec<(String, String)>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a context from flat key/value arguments
    pub fn from_pairs(kv: KeyValues<'_>) -> Self {
        let mut context = Self::new();
        context.extend_pairs(kv);
        context
    }

    /// Add a field to the context
    #[must_use]
    pub fn with_field(mut self, key: impl fmt::Display, value: impl fmt::Display) -> Self {
        self.add_field(key, value);
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field(&mut self, key: impl fmt::Display, value: impl fmt::Display) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    /// Append every complete pair of `kv`
    pub fn extend_pairs(&mut self, kv: KeyValues<'_>) {
        for (key, value) in pairs(kv) {
            self.add_field(key, value);
        }
    }

    /// Append all fields of `other`, after the existing ones
    pub fn extend(&mut self, other: &LogContext) {
        self.fields.extend(other.fields.iter().cloned());
    }

    /// Fields in insertion order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl Serialize for LogContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
