//! Blockwright Block SDK
//!
//! This crate provides the contract between block implementations and the
//! host editor. A block is a declarative schema plus two pure rendering
//! functions: an edit-time view builder and a save-time markup builder. The
//! host owns document state, attribute storage, undo history, and the
//! edit/save mode transition; blocks only describe structure.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use blockwright_sdk::prelude::*;
//!
//! struct QuoteBlock;
//!
//! impl BlockType for QuoteBlock {
//!     fn info(&self) -> BlockInfo {
//!         BlockInfo::new("Quote")
//!             .icon("format-quote")
//!             .category("text")
//!     }
//!
//!     fn schema(&self) -> AttributeSchema {
//!         AttributeSchema::new().with("quote", AttrSpec::text())
//!     }
//!
//!     fn edit(&self, attrs: &AttributeBag) -> EditView {
//!         EditView::new("quote-form")
//!             .field("Quote:", Control::text_input("quote-input", attrs.text("quote"), "quote"))
//!     }
//!
//!     fn save(&self, attrs: &AttributeBag) -> Markup {
//!         Markup::element("blockquote").child(Markup::text(attrs.text("quote")))
//!     }
//! }
//! ```
//!
//! Registration is explicit: host bootstrap code hands the block to the
//! registry under a namespaced id (`"my-plugin/quote"`). Nothing registers
//! itself as a load-time side effect.

pub mod error;
pub mod prelude;
pub mod traits;
pub mod types;

// Re-exports
pub use error::{BlockError, Result};
pub use traits::BlockType;
pub use types::BlockInfo;
