//! Attribute model: values, schemas, bags, and patches
//!
//! These types are shared between block implementations and the host. The
//! host owns every [`AttributeBag`]; blocks read it during rendering and
//! request mutations by producing an [`AttributePatch`] that the host merges.

mod bag;
mod schema;
mod value;

pub use bag::{AttributeBag, AttributePatch};
pub use schema::{AttrSpec, AttributeSchema};
pub use value::{AttrKind, AttrValue};
