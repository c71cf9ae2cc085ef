//! Classifier configuration
//!
//! Searched in order:
//! 1. the path given with `--config`
//! 2. `.bitdiff.toml` in the current working directory
//! 3. `.bitdiff.toml` in the home directory
//!
//! Missing keys fall back to their defaults, a missing file means all
//! defaults.

use crate::errors::DiffError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".bitdiff.toml";

/// Files above this size are not diffed as text (5 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
/// Leading bytes inspected for NUL when sniffing binary content
pub const DEFAULT_BINARY_SNIFF_LEN: usize = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    pub max_file_size: u64,
    pub binary_sniff_len: usize,
    pub image_previews: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            binary_sniff_len: DEFAULT_BINARY_SNIFF_LEN,
            image_previews: true,
        }
    }
}

impl ClassifierConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, DiffError> {
        toml::from_str(content).map_err(|source| DiffError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the first config file found, or the defaults
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            let content = std::fs::read_to_string(path)?;
            log::debug!("Loaded config from {}", path.display());
            return Ok(Self::parse(&content, path)?);
        }

        for candidate in Self::candidates() {
            if let Ok(content) = std::fs::read_to_string(&candidate) {
                log::debug!("Loaded config from {}", candidate.display());
                return Ok(Self::parse(&content, &candidate)?);
            }
        }

        Ok(Self::default())
    }

    fn candidates() -> Vec<PathBuf> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(CONFIG_FILE));
        }
        candidates
    }
}
