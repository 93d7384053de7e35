//! Core data model for the Blockwright editor toolkit.
//!
//! This crate carries the types shared between block implementations and the
//! host editor:
//!
//! - the attribute model ([`attr`]): typed values, per-block schemas, the
//!   host-owned attribute bag, and partial-update patches,
//! - edit-mode view descriptions ([`view`]): the abstract form a block
//!   returns for authoring; the host owns diffing and actual rendering,
//! - publish-mode markup ([`markup`]): the static tree a block emits at
//!   save time, persisted verbatim by the host.

pub mod attr;
pub mod error;
pub mod markup;
pub mod view;

pub use attr::{AttrKind, AttrSpec, AttrValue, AttributeBag, AttributePatch, AttributeSchema};
pub use error::{AttrError, Result};
pub use markup::Markup;
pub use view::{Control, EditView, Field};
