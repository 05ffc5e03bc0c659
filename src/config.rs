// File: src/config.rs
use crate::core::types::GroupSeparator;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for a naming run, fixed before the first input line is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// How zillion groups are joined in each output name.
    pub separator: GroupSeparator,
    /// Echo each input line and a "Done" marker on stderr.
    pub progress: bool,
    pub use_cache: bool,
    /// Snapshot file used to warm-start and save the memo cache.
    pub cache_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            separator: GroupSeparator::Space,
            progress: false,
            use_cache: true,
            cache_file: None,
        }
    }
}

impl RunConfig {
    /// Reads a JSON config. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
