//! Configuration file support
//!
//! An optional TOML file supplies defaults for the command line:
//!
//! ```toml
//! mode = "RGBA"
//! log_file = "imatrix.log"
//! atomic_writes = true
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::matrix::{MatrixError, MatrixResult};

/// Settings read from a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pixel mode used when `--mode` is not given
    pub mode: Option<String>,
    /// Run log file; no run log when absent
    pub log_file: Option<String>,
    /// Write outputs to a temporary file and rename on success
    pub atomic_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: None,
            log_file: None,
            atomic_writes: true,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_str(content: &str) -> MatrixResult<Self> {
        toml::from_str(content).map_err(|e| MatrixError::ConfigError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> MatrixResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| MatrixError::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_str(&content)
    }
}
