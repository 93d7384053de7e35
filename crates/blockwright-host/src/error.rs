//! Error types for the Blockwright host runtime

use thiserror::Error;

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors that can occur in host operations
#[derive(Debug, Error)]
pub enum HostError {
    /// Block id lacks the `namespace/name` shape
    #[error("Invalid block id '{0}': expected namespace/name")]
    InvalidBlockId(String),

    /// A block type is already registered under this id
    #[error("Block already registered: {0}")]
    DuplicateBlock(String),

    /// No block type registered under this id
    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    /// Block type disabled by host configuration
    #[error("Block is disabled: {0}")]
    BlockDisabled(String),

    /// SDK-level block errors, raised when a patch disagrees with a schema
    #[error("Block error: {0}")]
    Block(#[from] blockwright_sdk::BlockError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
