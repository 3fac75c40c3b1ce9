use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;

/// Where to find the table documents, and how strictly to check them.
///
/// Usually read from a small TOML file:
///
/// ```toml
/// types = "data/type.json"
/// names = "data/name.json"
/// sequences = "data/sequence_name.json"
/// range_overlap = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    pub types: PathBuf,
    pub names: PathBuf,
    pub sequences: PathBuf,
    #[serde(default)]
    pub range_overlap: OverlapPolicy,
}

/// What to do when two name prefixes claim the same codepoint.
///
/// Lookups always let the prefix listed first win; this only decides
/// whether loading complains about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Log a warning and carry on.
    #[default]
    Warn,
    /// Refuse to load the tables.
    Reject,
    /// Don't check at all.
    Ignore,
}

impl DataConfig {
    pub fn new(
        types: impl Into<PathBuf>,
        names: impl Into<PathBuf>,
        sequences: impl Into<PathBuf>,
    ) -> Self {
        DataConfig {
            types: types.into(),
            names: names.into(),
            sequences: sequences.into(),
            range_overlap: OverlapPolicy::default(),
        }
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads the configuration from a TOML file. Relative data paths are
    /// taken relative to the directory holding that file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.rebase(dir);
        }
        Ok(config)
    }

    fn rebase(&mut self, dir: &Path) {
        for file in [&mut self.types, &mut self.names, &mut self.sequences] {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
    }
}
