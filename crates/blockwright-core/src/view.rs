//! Abstract view descriptions for edit-mode rendering
//!
//! A block's edit function returns an [`EditView`] value describing its
//! form. The host editor owns diffing and actual rendering; this crate only
//! describes structure and change routing.

use serde::{Deserialize, Serialize};

use crate::attr::AttributePatch;

/// A form control inside an edit view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Control {
    /// Single-line text input, optionally bound to an attribute.
    TextInput {
        id: String,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binds: Option<String>,
    },
    /// URL input. Same change semantics as a text input; no format is
    /// enforced on the entered value.
    UrlInput {
        id: String,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binds: Option<String>,
    },
    /// Numeric/percentage placeholder. Rendered with a unit suffix but
    /// wired to nothing; change events on it go nowhere.
    Measure { id: String, unit: String },
}

impl Control {
    /// A text input bound to an attribute.
    pub fn text_input(
        id: impl Into<String>,
        value: impl Into<String>,
        binds: impl Into<String>,
    ) -> Self {
        Control::TextInput {
            id: id.into(),
            value: value.into(),
            binds: Some(binds.into()),
        }
    }

    /// A URL input bound to an attribute.
    pub fn url_input(
        id: impl Into<String>,
        value: impl Into<String>,
        binds: impl Into<String>,
    ) -> Self {
        Control::UrlInput {
            id: id.into(),
            value: value.into(),
            binds: Some(binds.into()),
        }
    }

    /// An unbound measurement placeholder.
    pub fn measure(id: impl Into<String>, unit: impl Into<String>) -> Self {
        Control::Measure {
            id: id.into(),
            unit: unit.into(),
        }
    }

    /// The control's identifier within its view.
    pub fn id(&self) -> &str {
        match self {
            Control::TextInput { id, .. }
            | Control::UrlInput { id, .. }
            | Control::Measure { id, .. } => id,
        }
    }

    /// The attribute this control writes to, if any.
    pub fn binding(&self) -> Option<&str> {
        match self {
            Control::TextInput { binds, .. } | Control::UrlInput { binds, .. } => binds.as_deref(),
            Control::Measure { .. } => None,
        }
    }
}

/// One labelled row of an edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Row label shown next to the control
    pub label: String,
    /// The control itself
    pub control: Control,
    /// Small helper text shown after the control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// The edit-mode form for one block instance.
///
/// A pure value: rendering the same attribute bag twice yields an equal
/// view. The block carries no state of its own between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditView {
    /// Wrapper class the host applies to the rendered form
    pub class: String,
    /// Form rows in display order
    pub fields: Vec<Field>,
}

impl EditView {
    /// Create an empty form with the given wrapper class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Vec::new(),
        }
    }

    /// Append a row, builder style.
    pub fn field(mut self, label: impl Into<String>, control: Control) -> Self {
        self.fields.push(Field {
            label: label.into(),
            control,
            hint: None,
        });
        self
    }

    /// Append a row with helper text.
    pub fn field_with_hint(
        mut self,
        label: impl Into<String>,
        control: Control,
        hint: impl Into<String>,
    ) -> Self {
        self.fields.push(Field {
            label: label.into(),
            control,
            hint: Some(hint.into()),
        });
        self
    }

    /// Look up a control by id.
    pub fn control(&self, control_id: &str) -> Option<&Control> {
        self.fields
            .iter()
            .map(|field| &field.control)
            .find(|control| control.id() == control_id)
    }

    /// Translate an input-change event into an attribute patch.
    ///
    /// A bound control yields a patch naming exactly its attribute with the
    /// raw entered value; unbound or unknown controls yield `None`. The
    /// value passes through unvalidated and undebounced.
    pub fn patch_for(&self, control_id: &str, raw: &str) -> Option<AttributePatch> {
        self.control(control_id)
            .and_then(Control::binding)
            .map(|attr| AttributePatch::single(attr, raw))
    }
}
