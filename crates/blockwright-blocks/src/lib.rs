//! Blockwright builtin blocks
//!
//! Blocks that ship with the toolkit. Each builtin implements
//! [`BlockType`](blockwright_sdk::BlockType); host bootstrap code registers
//! them explicitly via [`builtins`] — nothing here registers itself as a
//! load-time side effect.
//!
//! # Builtins
//!
//! - `embed`: the embed frame — an author-configurable iframe

pub mod embed;

pub use embed::{EMBED_BLOCK_ID, EmbedBlock};

use blockwright_sdk::BlockType;

/// All builtin blocks, paired with the namespaced ids they register under.
pub fn builtins() -> Vec<(&'static str, Box<dyn BlockType>)> {
    vec![(EMBED_BLOCK_ID, Box::new(EmbedBlock))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_carry_namespaced_ids() {
        let builtins = builtins();
        assert!(!builtins.is_empty(), "Expected at least the embed builtin");
        for (id, _) in &builtins {
            assert!(id.contains('/'), "Builtin id '{id}' lacks a namespace");
        }
    }
}
