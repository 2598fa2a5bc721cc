//! Image sources handed to the external decoder

use image::{DynamicImage, ImageError};
use log::debug;
use std::path::{Path, PathBuf};

use crate::matrix::{MatrixError, MatrixResult};

/// Anything that can produce a decoded image
///
/// The decoding itself is delegated to the `image` crate; implementations
/// only decide where the encoded bytes come from.
pub trait ImageSource {
    /// Decode the source into an image
    fn decode(&self) -> MatrixResult<DynamicImage>;

    /// Human-readable name used in logs and summaries
    fn describe(&self) -> String;
}

/// Image stored in a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileSource {
    fn decode(&self) -> MatrixResult<DynamicImage> {
        debug!("Decoding image file {}", self.path.display());
        // Format is guessed from the file contents, not the extension
        let image = image::ImageReader::open(&self.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| MatrixError::DecodeError(ImageError::IoError(e)))?
            .decode()?;
        Ok(image)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Encoded image held in memory
#[derive(Debug, Clone)]
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: Vec<u8>) -> Self {
        MemorySource { bytes }
    }
}

impl ImageSource for MemorySource {
    fn decode(&self) -> MatrixResult<DynamicImage> {
        debug!("Decoding {} in-memory bytes", self.bytes.len());
        Ok(image::load_from_memory(&self.bytes)?)
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }
}
