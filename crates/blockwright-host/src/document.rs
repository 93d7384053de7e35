//! Host-owned documents of block instances
//!
//! A document is the ordered list of blocks an author has inserted. The
//! host stores it as JSON and publishes it by saving each instance through
//! the registry and concatenating the rendered markup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::instance::BlockInstance;
use crate::registry::BlockRegistry;

/// An ordered collection of block instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    blocks: Vec<BlockInstance>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance at the end of the document.
    pub fn push(&mut self, instance: BlockInstance) {
        self.blocks.push(instance);
    }

    /// Insert an instance at a position, shifting later blocks down.
    pub fn insert(&mut self, index: usize, instance: BlockInstance) {
        self.blocks.insert(index.min(self.blocks.len()), instance);
    }

    /// Remove the instance at a position. Its attribute bag is dropped with
    /// it; nothing of the block survives in the document.
    pub fn remove(&mut self, index: usize) -> Option<BlockInstance> {
        if index < self.blocks.len() {
            Some(self.blocks.remove(index))
        } else {
            None
        }
    }

    /// The instance at a position.
    pub fn get(&self, index: usize) -> Option<&BlockInstance> {
        self.blocks.get(index)
    }

    /// Mutable access to the instance at a position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut BlockInstance> {
        self.blocks.get_mut(index)
    }

    /// Number of blocks in the document.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate instances in document order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockInstance> {
        self.blocks.iter()
    }

    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Store the document as pretty-printed JSON.
    pub fn store(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Publish the document: save every instance through the registry and
    /// concatenate the rendered markup in document order, one block per
    /// line.
    pub fn publish(&self, registry: &BlockRegistry) -> Result<String> {
        let mut out = String::new();
        for instance in &self.blocks {
            out.push_str(&registry.save(instance)?.render());
            out.push('\n');
        }
        Ok(out)
    }
}
