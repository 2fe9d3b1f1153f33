//! Ordered field set for signed API calls.
//!
//! The remote signature check canonicalizes parameters by ascending
//! byte-lexicographic key order, so the field set is backed by a `BTreeMap`
//! and iteration order is the signing order. Values are plain strings: the
//! digest is computed over the exact strings that go on the wire.

use std::collections::BTreeMap;

use serde::Serialize;

/// An ordered-by-key mapping of request parameters for one API call.
///
/// Keys are unique; inserting an existing key replaces its value. Optional
/// parameters are added with [`FieldSet::insert_opt`], which drops absent and
/// empty values entirely: an omitted field and an empty-string field produce
/// different signatures, and the remote API expects omission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    entries: BTreeMap<String, String>,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert a field only when the value is present and non-empty.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.entries.insert(key.into(), value.to_string());
            }
        }
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the field set contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the field set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over fields in ascending byte-lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
