//! The block trait defining the contract between blocks and the host
//!
//! Block implementations are stateless: each render is a pure function of
//! the current attribute bag, and the host externally drives the edit/save
//! mode transition.

use blockwright_core::{AttributeBag, AttributePatch, AttributeSchema, EditView, Markup};

use crate::error::Result;
use crate::types::BlockInfo;

/// A block type registrable with the host.
///
/// Implementations must be `Send + Sync` so a registry can be shared; they
/// carry no per-instance state, which lives entirely in the host-owned
/// attribute bag.
pub trait BlockType: Send + Sync {
    /// Registration metadata for the inserter UI.
    fn info(&self) -> BlockInfo;

    /// Declared attributes with their kinds and defaults. The host seeds a
    /// fresh instance's bag from this schema.
    fn schema(&self) -> AttributeSchema;

    /// Build the edit-mode form for the current attributes.
    ///
    /// Pure: reads the bag and returns a view description. Mutation happens
    /// only when the host routes an input-change event through
    /// [`EditView::patch_for`] and merges the resulting patch.
    fn edit(&self, attrs: &AttributeBag) -> EditView;

    /// Build the publish-time markup for the final attributes.
    ///
    /// Pure and deterministic: the same bag always yields identical markup.
    /// The host persists the rendered output verbatim.
    fn save(&self, attrs: &AttributeBag) -> Markup;

    /// Check a requested attribute update against the declared schema.
    ///
    /// Hosts call this before merging a patch into an instance's bag;
    /// renderers never do.
    fn check_patch(&self, patch: &AttributePatch) -> Result<()> {
        self.schema().check(patch)?;
        Ok(())
    }
}
