//! Block registry for managing registered block types
//!
//! Registration is explicit: host bootstrap code hands each block type to
//! [`BlockRegistry::register`] under a namespaced id. The registry also
//! mediates every instance operation — seeding, patching, edit and save
//! rendering — so blocks never touch host state directly.

use indexmap::IndexMap;
use tracing::info;

use blockwright_core::{AttributeBag, AttributePatch, EditView, Markup};
use blockwright_sdk::{BlockInfo, BlockType};

use crate::config::HostConfig;
use crate::error::{HostError, Result};
use crate::instance::BlockInstance;

/// Registry of block types known to the host.
pub struct BlockRegistry {
    blocks: IndexMap<String, Box<dyn BlockType>>,
    config: HostConfig,
}

impl BlockRegistry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create an empty registry with the given host configuration.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            blocks: IndexMap::new(),
            config,
        }
    }

    /// Register a block type under a namespaced id (`namespace/name`).
    ///
    /// Ids must be unique; registering twice under the same id is an error
    /// rather than a silent replacement.
    pub fn register(&mut self, id: impl Into<String>, block: Box<dyn BlockType>) -> Result<()> {
        let id = id.into();
        check_block_id(&id)?;
        if self.blocks.contains_key(&id) {
            return Err(HostError::DuplicateBlock(id));
        }
        info!("Registering block type: {}", id);
        self.blocks.insert(id, block);
        Ok(())
    }

    /// Remove a block type from the registry.
    pub fn unregister(&mut self, id: &str) -> Result<()> {
        if self.blocks.shift_remove(id).is_some() {
            info!("Block type unregistered: {}", id);
            Ok(())
        } else {
            Err(HostError::UnknownBlock(id.to_string()))
        }
    }

    /// Get a registered block type.
    pub fn get(&self, id: &str) -> Option<&dyn BlockType> {
        self.blocks.get(id).map(|block| block.as_ref())
    }

    /// Whether a block type is registered under this id.
    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    /// List registered block types in registration order.
    pub fn list(&self) -> Vec<(&str, BlockInfo)> {
        self.blocks
            .iter()
            .map(|(id, block)| (id.as_str(), block.info()))
            .collect()
    }

    /// Create a fresh instance of a block type.
    ///
    /// The attribute bag is seeded from the block's schema defaults.
    /// Disabled block types refuse instantiation.
    pub fn create_instance(&self, id: &str) -> Result<BlockInstance> {
        let block = self.require(id)?;
        if !self.config.is_enabled(id) {
            return Err(HostError::BlockDisabled(id.to_string()));
        }
        let attributes = AttributeBag::from_schema(&block.schema());
        Ok(BlockInstance::new(id, attributes))
    }

    /// Apply an attribute patch to an instance.
    ///
    /// This is the host-supplied setter of the block contract: the patch is
    /// checked against the block's schema, then merged so that exactly the
    /// named fields are replaced.
    pub fn apply_patch(&self, instance: &mut BlockInstance, patch: AttributePatch) -> Result<()> {
        let block = self.require(instance.block())?;
        block.check_patch(&patch)?;
        instance.attributes_mut().merge(patch);
        Ok(())
    }

    /// Render the edit-mode form for an instance.
    pub fn render_edit(&self, instance: &BlockInstance) -> Result<EditView> {
        let block = self.require(instance.block())?;
        Ok(block.edit(instance.attributes()))
    }

    /// Render the publish-time markup for an instance.
    pub fn save(&self, instance: &BlockInstance) -> Result<Markup> {
        let block = self.require(instance.block())?;
        Ok(block.save(instance.attributes()))
    }

    /// The host configuration this registry was created with.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    fn require(&self, id: &str) -> Result<&dyn BlockType> {
        self.get(id)
            .ok_or_else(|| HostError::UnknownBlock(id.to_string()))
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Block ids are `namespace/name`, both parts lowercase alphanumeric with
/// dashes, starting with a letter.
fn check_block_id(id: &str) -> Result<()> {
    let mut parts = id.split('/');
    let (Some(namespace), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(HostError::InvalidBlockId(id.to_string()));
    };
    for part in [namespace, name] {
        let mut chars = part.chars();
        let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        let rest_ok = part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !starts_alpha || !rest_ok {
            return Err(HostError::InvalidBlockId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockwright_core::{AttrSpec, AttributeSchema};

    struct NullBlock;

    impl BlockType for NullBlock {
        fn info(&self) -> BlockInfo {
            BlockInfo::new("Null")
        }

        fn schema(&self) -> AttributeSchema {
            AttributeSchema::new().with("label", AttrSpec::text().with_default("x"))
        }

        fn edit(&self, _attrs: &AttributeBag) -> EditView {
            EditView::new("null-form")
        }

        fn save(&self, attrs: &AttributeBag) -> Markup {
            Markup::element("span").child(Markup::text(attrs.text("label")))
        }
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = BlockRegistry::new();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = BlockRegistry::new();
        registry
            .register("test/null", Box::new(NullBlock))
            .expect("valid id");

        assert!(registry.contains("test/null"));
        assert_eq!(registry.list()[0].0, "test/null");
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = BlockRegistry::new();
        registry.register("test/null", Box::new(NullBlock)).unwrap();

        let err = registry
            .register("test/null", Box::new(NullBlock))
            .unwrap_err();
        assert!(matches!(err, HostError::DuplicateBlock(_)));
    }

    #[test]
    fn test_id_requires_namespace() {
        let mut registry = BlockRegistry::new();
        for bad in ["null", "test/", "/null", "a/b/c", "Test/null", "test/nu ll"] {
            let err = registry.register(bad, Box::new(NullBlock)).unwrap_err();
            assert!(matches!(err, HostError::InvalidBlockId(_)), "id: {bad}");
        }
    }

    #[test]
    fn test_instance_seeds_schema_defaults() {
        let mut registry = BlockRegistry::new();
        registry.register("test/null", Box::new(NullBlock)).unwrap();

        let instance = registry.create_instance("test/null").unwrap();
        assert_eq!(instance.attributes().text("label"), "x");
    }

    #[test]
    fn test_patch_is_checked_against_schema() {
        let mut registry = BlockRegistry::new();
        registry.register("test/null", Box::new(NullBlock)).unwrap();
        let mut instance = registry.create_instance("test/null").unwrap();

        let err = registry
            .apply_patch(&mut instance, AttributePatch::single("missing", "v"))
            .unwrap_err();
        assert!(matches!(err, HostError::Block(_)));

        // Rejected patches leave the bag untouched
        assert_eq!(instance.attributes().text("label"), "x");
    }

    #[test]
    fn test_unregister() {
        let mut registry = BlockRegistry::new();
        registry.register("test/null", Box::new(NullBlock)).unwrap();

        registry.unregister("test/null").unwrap();
        assert!(!registry.contains("test/null"));
        assert!(matches!(
            registry.unregister("test/null"),
            Err(HostError::UnknownBlock(_))
        ));
    }
}
