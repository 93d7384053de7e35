//! Prelude module for convenient imports
//!
//! ```rust
//! use blockwright_sdk::prelude::*;
//! ```

// Re-export core model types
pub use blockwright_core::{
    AttrKind, AttrSpec, AttrValue, AttributeBag, AttributePatch, AttributeSchema, Control,
    EditView, Field, Markup,
};

// Re-export the block contract
pub use crate::traits::BlockType;
pub use crate::types::BlockInfo;

// Re-export error types
pub use crate::error::{BlockError, Result};
