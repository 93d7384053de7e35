//! Blockwright host runtime
//!
//! The host side of the block contract. The registry owns registration and
//! instance lifecycle; documents own the block instances an author has
//! inserted; configuration can disable individual block types. Blocks
//! themselves stay pure — every mutation flows through
//! [`BlockRegistry::apply_patch`].

pub mod config;
pub mod document;
pub mod error;
pub mod instance;
pub mod registry;

pub use config::{BlockConfig, HostConfig};
pub use document::Document;
pub use error::{HostError, Result};
pub use instance::BlockInstance;
pub use registry::BlockRegistry;
