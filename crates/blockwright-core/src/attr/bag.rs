use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attr::schema::AttributeSchema;
use crate::attr::value::AttrValue;

/// A partial attribute update.
///
/// Produced on the edit path (one entry per input-change event) and merged
/// into the host-owned bag. Merging replaces exactly the named fields and
/// leaves everything else untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePatch {
    entries: IndexMap<String, AttrValue>,
}

impl AttributePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch naming exactly one attribute.
    pub fn single(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self::new().with(name, value)
    }

    /// Add an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Add or replace an entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Whether the patch names the given attribute.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of named attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the patch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// The named, typed key-value record describing one block instance's
/// configurable state.
///
/// The host owns every bag. Blocks read it during rendering and request
/// mutations only through patches the host merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    entries: IndexMap<String, AttrValue>,
}

impl AttributeBag {
    /// Seed a bag from a schema, in declaration order, using each
    /// attribute's default (or the kind's empty value).
    pub fn from_schema(schema: &AttributeSchema) -> Self {
        let entries = schema
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.initial_value()))
            .collect();
        Self { entries }
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Text content of an attribute; empty for missing or non-text values.
    ///
    /// Save renderers rely on this pass-through behavior: a missing link
    /// becomes an iframe with an empty source, not an error.
    pub fn text(&self, name: &str) -> &str {
        self.entries
            .get(name)
            .and_then(AttrValue::as_text)
            .unwrap_or("")
    }

    /// Flag state of an attribute; `false` for missing or non-flag values.
    pub fn flag(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .and_then(AttrValue::as_flag)
            .unwrap_or(false)
    }

    /// Merge a patch, replacing exactly the named fields.
    pub fn merge(&mut self, patch: AttributePatch) {
        for (name, value) in patch.entries {
            self.entries.insert(name, value);
        }
    }

    /// Number of attributes in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}
