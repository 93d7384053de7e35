//! Registration metadata for block types
//!
//! These types describe a block to the host editor's inserter UI: display
//! title, icon, category, and search keywords.

use serde::{Deserialize, Serialize};

/// Information about a block type, supplied at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Human-readable title shown in the inserter
    pub title: String,
    /// Icon identifier resolved by the host's icon set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Category identifier used to group blocks in the inserter
    #[serde(default = "default_category")]
    pub category: String,
    /// Search keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_category() -> String {
    "common".to_string()
}

impl BlockInfo {
    /// Create info with the given display title and the default category.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            category: default_category(),
            keywords: Vec::new(),
            description: None,
        }
    }

    /// Set the icon identifier.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the category identifier.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add a search keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
