//! Scene metadata model.

use std::collections::BTreeMap;

/// Names of every field the parser can produce, in the order they are
/// usually written in a release name.
pub const FIELD_NAMES: &[&str] = &[
    "title",
    "year",
    "season",
    "episode",
    "edition",
    "resolution",
    "source",
    "codec",
    "audio",
    "proper",
    "repack",
    "group",
    "container",
];

/// Structured fields extracted from a release filename.
///
/// Fields the parser did not recognize are absent rather than empty, so a
/// renderer can tell "no value" from "empty value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SceneMetadata {
    fields: BTreeMap<String, String>,
}

impl SceneMetadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    /// Whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was recognized.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builder-style insert, used by tests and callers that compose their
    /// own mappings.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field. Rules only insert once per field; the first writer wins.
    pub(crate) fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields
            .entry(name.to_string())
            .or_insert_with(|| value.into());
    }
}
