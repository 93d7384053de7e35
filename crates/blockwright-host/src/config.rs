//! Host configuration
//!
//! TOML-backed per-block settings. Absent entries mean a block type runs
//! with defaults (enabled, no options).
//!
//! ```toml
//! [blocks."blockwright/embed-frame"]
//! enabled = true
//!
//! [blocks."vendor/experimental"]
//! enabled = false
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for one block type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Whether the block type may be instantiated
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Block-specific options, passed through untyped
    #[serde(default)]
    pub options: HashMap<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: HashMap::new(),
        }
    }
}

/// Host configuration for a registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Per-block settings keyed by block id
    #[serde(default)]
    pub blocks: HashMap<String, BlockConfig>,
}

impl HostConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Settings for a block id, if configured.
    pub fn block(&self, id: &str) -> Option<&BlockConfig> {
        self.blocks.get(id)
    }

    /// Whether a block id may be instantiated. Unconfigured blocks are
    /// enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.blocks.get(id).is_none_or(|config| config.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unconfigured_blocks_are_enabled() {
        let config = HostConfig::default();
        assert!(config.is_enabled("any/block"));
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[blocks."vendor/off"]
enabled = false

[blocks."vendor/on"]
enabled = true
"#
        )
        .unwrap();

        let config = HostConfig::load(file.path()).unwrap();
        assert!(!config.is_enabled("vendor/off"));
        assert!(config.is_enabled("vendor/on"));
        assert!(config.is_enabled("vendor/unmentioned"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HostConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::HostError::Io(_)));
    }
}
