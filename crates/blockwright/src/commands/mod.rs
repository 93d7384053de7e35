//! CLI command implementations

pub mod blocks;
pub mod render;

pub use blocks::run_blocks;
pub use render::run_render;

use anyhow::Result;
use blockwright_host::{BlockRegistry, HostConfig};

/// Build the registry a CLI session works with.
///
/// Builtins are registered explicitly here, during bootstrap — block crates
/// never register themselves at load time.
pub fn bootstrap_registry(config: HostConfig) -> Result<BlockRegistry> {
    let mut registry = BlockRegistry::with_config(config);
    for (id, block) in blockwright_blocks::builtins() {
        registry.register(id, block)?;
    }
    Ok(registry)
}
