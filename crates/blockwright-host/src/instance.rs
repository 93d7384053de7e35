//! Block instances: one widget occurrence inside a document

use serde::{Deserialize, Serialize};

use blockwright_core::AttributeBag;

/// One block occurrence and its host-owned attribute bag.
///
/// Created when a block is inserted into a document, mutated only through
/// [`BlockRegistry::apply_patch`](crate::BlockRegistry::apply_patch), and
/// dropped when the containing document entry is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInstance {
    /// Id of the block type this instance renders with
    block: String,
    /// The instance's configurable state
    attributes: AttributeBag,
}

impl BlockInstance {
    /// Create an instance from a block-type id and a seeded bag.
    pub fn new(block: impl Into<String>, attributes: AttributeBag) -> Self {
        Self {
            block: block.into(),
            attributes,
        }
    }

    /// The block-type id.
    pub fn block(&self) -> &str {
        &self.block
    }

    /// The attribute bag.
    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    /// Mutable access for the registry's merge path.
    pub(crate) fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}
