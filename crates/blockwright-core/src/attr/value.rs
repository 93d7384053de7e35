use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute kinds declarable in a block schema.
///
/// Hosts may grow this set; the blocks shipped in this workspace only use
/// text and flag attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttrKind {
    /// Free text. URLs are carried as text; no format is enforced.
    Text,
    /// Boolean toggle
    Flag,
}

impl AttrKind {
    /// The empty value for this kind, used when a schema entry declares no
    /// default.
    pub fn empty_value(self) -> AttrValue {
        match self {
            AttrKind::Text => AttrValue::Text(String::new()),
            AttrKind::Flag => AttrValue::Flag(false),
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKind::Text => write!(f, "text"),
            AttrKind::Flag => write!(f, "flag"),
        }
    }
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl AttrValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Text(_) => AttrKind::Text,
            AttrValue::Flag(_) => AttrKind::Flag,
        }
    }

    /// Borrow the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag(_) => None,
        }
    }

    /// The flag state, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AttrValue::Flag(b) => Some(*b),
            AttrValue::Text(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}
