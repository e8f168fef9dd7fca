//! Process-wide configuration.
//!
//! One setting exists: the source tree root against which schema file
//! arguments are resolved. It is established once, before any render
//! pass, and read-only afterwards. Hosts either construct the value
//! directly or load it from an `idldoc.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Raw configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigRaw {
    srctree: Option<String>,
}

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("can't read config file {}: {source}", path.display())]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Config file is not valid TOML.
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying TOML failure.
        source: toml::de::Error,
    },
}

/// Read-only settings established before any render pass.
#[derive(Clone, Debug)]
pub struct DocConfig {
    srctree: PathBuf,
}

impl DocConfig {
    /// Configure the source tree root directly.
    #[must_use]
    pub fn new(srctree: impl Into<PathBuf>) -> Self {
        Self {
            srctree: srctree.into(),
        }
    }

    /// Load configuration from an `idldoc.toml` file.
    ///
    /// A relative `srctree` is resolved against the config file's
    /// directory; a missing key defaults to that directory itself.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: ConfigRaw = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let srctree = match raw.srctree {
            Some(dir) => base.join(dir),
            None => base.to_path_buf(),
        };
        Ok(Self { srctree })
    }

    /// The source tree root.
    #[must_use]
    pub fn srctree(&self) -> &Path {
        &self.srctree
    }

    /// Resolve a schema file argument against the source tree.
    #[must_use]
    pub fn resolve(&self, argument: &str) -> PathBuf {
        self.srctree.join(argument)
    }
}
