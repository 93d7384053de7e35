//! Error types for the Blockwright block SDK

use thiserror::Error;

/// Result type for block operations
pub type Result<T> = std::result::Result<T, BlockError>;

/// Errors that can occur at the block/host boundary.
///
/// Renderers themselves never fail; these arise when the host checks a
/// patch against a schema or (de)serializes block state.
#[derive(Debug, Error)]
pub enum BlockError {
    /// Patch disagreed with the block's declared schema
    #[error("Attribute error: {0}")]
    Attribute(#[from] blockwright_core::AttrError),
}
