//! Error types for pixel matrix extraction and encoding

use std::fmt;
use std::io;

/// Errors raised while extracting, encoding or reading pixel matrices
#[derive(Debug)]
pub enum MatrixError {
    /// Requested pixel mode is not one of L, RGB or RGBA
    InvalidMode(String),
    /// Output destinations were selected incorrectly (none or both)
    UsageError(String),
    /// Source image could not be opened or decoded
    DecodeError(image::ImageError),
    /// I/O error while writing or reading a matrix file
    IoError(io::Error),
    /// Payload length does not match width * height * channels
    InvalidLength {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Channel count other than 1, 3 or 4
    InvalidChannels(u32),
    /// Malformed IMAT container
    InvalidContainer(String),
    /// Malformed JSON matrix document
    JsonError(serde_json::Error),
    /// Configuration file could not be parsed
    ConfigError(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidMode(m) => write!(f, "Invalid mode '{}': mode must be one of: L, RGB, RGBA", m),
            MatrixError::UsageError(msg) => write!(f, "Usage error: {}", msg),
            MatrixError::DecodeError(e) => write!(f, "Failed to decode image: {}", e),
            MatrixError::IoError(e) => write!(f, "I/O error: {}", e),
            MatrixError::InvalidLength { expected, actual } => {
                write!(f, "Invalid payload length: expected {} bytes, got {}", expected, actual)
            }
            MatrixError::InvalidChannels(c) => write!(f, "Unsupported channel count: {} (expected 1, 3 or 4)", c),
            MatrixError::InvalidContainer(msg) => write!(f, "Invalid IMAT container: {}", msg),
            MatrixError::JsonError(e) => write!(f, "Invalid JSON matrix: {}", e),
            MatrixError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::DecodeError(e) => Some(e),
            MatrixError::IoError(e) => Some(e),
            MatrixError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MatrixError {
    fn from(error: io::Error) -> Self {
        MatrixError::IoError(error)
    }
}

impl From<image::ImageError> for MatrixError {
    fn from(error: image::ImageError) -> Self {
        MatrixError::DecodeError(error)
    }
}

impl From<serde_json::Error> for MatrixError {
    fn from(error: serde_json::Error) -> Self {
        // Write failures surface through serde_json; keep them in the I/O bucket
        if error.is_io() {
            MatrixError::IoError(io::Error::from(error))
        } else {
            MatrixError::JsonError(error)
        }
    }
}

/// Result type for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;
