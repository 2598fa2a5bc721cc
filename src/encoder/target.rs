//! Output destination selection

use std::path::{Path, PathBuf};

use crate::matrix::{MatrixError, MatrixResult};

/// Where and how the matrix is written; JSON and binary are exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// JSON document at the given path
    Json(PathBuf),
    /// IMAT binary container at the given path
    Binary(PathBuf),
}

impl OutputTarget {
    /// Build a target from the two optional destinations
    ///
    /// # Returns
    /// The selected target, or `UsageError` unless exactly one is given
    pub fn from_options(json: Option<&str>, binary: Option<&str>) -> MatrixResult<Self> {
        match (json, binary) {
            (Some(path), None) => Ok(OutputTarget::Json(PathBuf::from(path))),
            (None, Some(path)) => Ok(OutputTarget::Binary(PathBuf::from(path))),
            (Some(_), Some(_)) => Err(MatrixError::UsageError(
                "--json and --bin are mutually exclusive".to_string(),
            )),
            (None, None) => Err(MatrixError::UsageError(
                "one of --json or --bin is required".to_string(),
            )),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        match self {
            OutputTarget::Json(path) | OutputTarget::Binary(path) => path,
        }
    }
}
