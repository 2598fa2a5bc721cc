use std::fmt;
use std::fs::File;
use std::io::BufReader;
use log::info;

use crate::encoder::{EncoderFactory, JsonEncoder, OutputTarget};
use crate::extractor::{ImageSource, PixelExtractor};
use crate::io::output;
use crate::matrix::{ContainerReader, MatrixResult, PixelMatrix, PixelMode};
use crate::utils::logger::Logger;

/// Summary of an extracted matrix, reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Description of the source image
    pub source: String,
    pub mode: PixelMode,
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    /// Payload size in bytes
    pub byte_len: usize,
}

impl ConversionSummary {
    /// Build the summary for a matrix extracted from `source`
    pub fn new(source: &str, mode: PixelMode, matrix: &PixelMatrix) -> Self {
        ConversionSummary {
            source: source.to_string(),
            mode,
            width: matrix.width(),
            height: matrix.height(),
            channels: matrix.channels(),
            byte_len: matrix.byte_len(),
        }
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loaded {}  mode={}  {}x{}x{}  bytes={}",
               self.source, self.mode, self.width, self.height, self.channels, self.byte_len)
    }
}

/// Main interface to the imatrix library
pub struct ImageMatrix<'a> {
    logger: &'a Logger,
    atomic_writes: bool,
}

impl<'a> ImageMatrix<'a> {
    /// Create a new ImageMatrix instance
    ///
    /// # Arguments
    /// * `logger` - Run logger
    /// * `atomic_writes` - Publish outputs only once fully written
    pub fn new(logger: &'a Logger, atomic_writes: bool) -> Self {
        ImageMatrix { logger, atomic_writes }
    }

    /// Decode a source image and extract its pixel matrix
    pub fn load(&self, source: &dyn ImageSource, mode: PixelMode) -> MatrixResult<PixelMatrix> {
        let matrix = PixelExtractor::extract_from_source(source, mode)?;
        if self.logger.is_enabled() {
            self.logger.log(&ConversionSummary::new(&source.describe(), mode, &matrix).to_string())?;
        }
        Ok(matrix)
    }

    /// Serialize a matrix to the selected output
    pub fn write(&self, matrix: &PixelMatrix, target: &OutputTarget) -> MatrixResult<()> {
        let encoder = EncoderFactory::create_encoder(target);
        info!("Writing {} output to {}", encoder.name(), target.path().display());

        output::write_file(target.path(), self.atomic_writes, |writer| encoder.encode(matrix, writer))?;

        if self.logger.is_enabled() {
            self.logger.log(&confirmation(target))?;
        }
        Ok(())
    }

    /// Extract a source image and write it to the selected output
    ///
    /// # Returns
    /// The summary of the written matrix
    pub fn convert(&self, source: &dyn ImageSource, mode: PixelMode,
                   target: &OutputTarget) -> MatrixResult<ConversionSummary> {
        let matrix = self.load(source, mode)?;
        self.write(&matrix, target)?;
        Ok(ConversionSummary::new(&source.describe(), mode, &matrix))
    }

    /// Read a matrix back from a file written by [`ImageMatrix::write`]
    pub fn read(&self, target: &OutputTarget) -> MatrixResult<PixelMatrix> {
        match target {
            OutputTarget::Json(path) => JsonEncoder::decode(BufReader::new(File::open(path)?)),
            OutputTarget::Binary(path) => Ok(ContainerReader::read_path(path)?.1),
        }
    }
}

/// The line reported after an output has been written
pub fn confirmation(target: &OutputTarget) -> String {
    let label = EncoderFactory::create_encoder(target).label();
    format!("Wrote {:<4} -> {}", label, target.path().display())
}
