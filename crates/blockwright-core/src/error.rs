//! Error types for the core attribute model

use thiserror::Error;

use crate::attr::AttrKind;

/// Result type for attribute operations
pub type Result<T> = std::result::Result<T, AttrError>;

/// Errors raised when a patch or lookup disagrees with a schema
#[derive(Debug, Error)]
pub enum AttrError {
    /// Attribute name not declared by the schema
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Value kind does not match the declared kind
    #[error("Attribute '{name}' expects {expected}, got {actual}")]
    KindMismatch {
        name: String,
        expected: AttrKind,
        actual: AttrKind,
    },
}
