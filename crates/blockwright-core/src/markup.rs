//! Static markup emitted by save-mode rendering
//!
//! A block's save function returns a [`Markup`] tree; the host serializes
//! the rendered string verbatim into the stored document. Rendering is
//! deterministic and writes attribute values as-is: escaping of persisted
//! markup is the host editor's responsibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of published markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "node", rename_all = "kebab-case")]
pub enum Markup {
    /// An element with attributes and children
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attrs: Vec<(String, String)>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Markup>,
    },
    /// A text node, emitted verbatim
    Text(String),
}

impl Markup {
    /// An element with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        Markup::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A text node.
    pub fn text(content: impl Into<String>) -> Self {
        Markup::Text(content.into())
    }

    /// Add an attribute, builder style. No-op on text nodes.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Markup::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Append a child node, builder style. No-op on text nodes.
    pub fn child(mut self, node: Markup) -> Self {
        if let Markup::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Render the tree to a string.
    ///
    /// Attributes render in insertion order and elements always carry an
    /// explicit closing tag, so equal trees render to identical strings.
    /// Attribute values are written inside double quotes without escaping.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Markup::Text(content) => out.push_str(content),
            Markup::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                for node in children {
                    node.write(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
