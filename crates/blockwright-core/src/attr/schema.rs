use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attr::bag::AttributePatch;
use crate::attr::value::{AttrKind, AttrValue};
use crate::error::{AttrError, Result};

/// Declaration of a single attribute: its kind and an optional default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrSpec {
    /// Declared kind
    pub kind: AttrKind,
    /// Value a fresh instance starts with; falls back to the kind's empty
    /// value when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<AttrValue>,
}

impl AttrSpec {
    /// A text attribute with no declared default.
    pub fn text() -> Self {
        Self {
            kind: AttrKind::Text,
            default: None,
        }
    }

    /// A flag attribute with no declared default.
    pub fn flag() -> Self {
        Self {
            kind: AttrKind::Flag,
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, value: impl Into<AttrValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The value a newly created instance receives for this attribute.
    pub fn initial_value(&self) -> AttrValue {
        self.default
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }
}

/// Ordered attribute declarations for one block type.
///
/// Iteration order is declaration order, which also fixes the order of the
/// seeded attribute bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSchema {
    entries: IndexMap<String, AttrSpec>,
}

impl AttributeSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute declaration, builder style.
    pub fn with(mut self, name: impl Into<String>, spec: AttrSpec) -> Self {
        self.entries.insert(name.into(), spec);
        self
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&AttrSpec> {
        self.entries.get(name)
    }

    /// Whether the schema declares the given attribute.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Check a patch against the declared names and kinds.
    ///
    /// The host applies this before merging a patch into a bag. Renderers
    /// never call it; they pass values through unvalidated.
    pub fn check(&self, patch: &AttributePatch) -> Result<()> {
        for (name, value) in patch.iter() {
            let spec = self
                .entries
                .get(name)
                .ok_or_else(|| AttrError::UnknownAttribute(name.to_string()))?;
            if value.kind() != spec.kind {
                return Err(AttrError::KindMismatch {
                    name: name.to_string(),
                    expected: spec.kind,
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }
}
