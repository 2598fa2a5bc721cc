//! Reader for the IMAT binary container
//!
//! Parses the fixed 24-byte little-endian header and the raw payload that
//! follows it, rejecting anything that deviates from the layout.

use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use super::constants::header;
use super::errors::{MatrixError, MatrixResult};
use super::pixel_matrix::PixelMatrix;

/// Header fields of an IMAT container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub depth: u32,
}

impl ContainerHeader {
    /// Read and validate the header from the start of a container
    pub fn read(reader: &mut impl Read) -> MatrixResult<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(truncated)?;
        if &magic != header::MAGIC {
            return Err(MatrixError::InvalidContainer(format!("bad magic {:?}", magic)));
        }

        let version = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        if version != header::VERSION {
            return Err(MatrixError::InvalidContainer(format!("unsupported version {}", version)));
        }

        let width = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        let height = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        let channels = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        let depth = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        if depth != header::DEPTH {
            return Err(MatrixError::InvalidContainer(format!("unsupported depth {}", depth)));
        }

        debug!("IMAT header: v{} {}x{}x{} depth={}", version, width, height, channels, depth);

        Ok(ContainerHeader {
            version,
            width,
            height,
            channels,
            depth,
        })
    }
}

/// Reads IMAT containers back into pixel matrices
pub struct ContainerReader;

impl ContainerReader {
    /// Parse a complete container from a reader
    ///
    /// The reader must be positioned at the magic bytes and must end exactly
    /// after the payload.
    pub fn read(reader: &mut impl Read) -> MatrixResult<(ContainerHeader, PixelMatrix)> {
        let header = ContainerHeader::read(reader)?;

        let len = PixelMatrix::expected_len(header.width, header.height, header.channels)
            .ok_or_else(|| MatrixError::InvalidContainer("payload size overflows".to_string()))?;
        let mut data = Vec::new();
        reader.by_ref().take(len as u64).read_to_end(&mut data)?;
        if data.len() != len {
            return Err(MatrixError::InvalidLength {
                expected: len,
                actual: data.len(),
            });
        }

        let mut probe = [0u8; 1];
        if reader.read(&mut probe)? != 0 {
            return Err(MatrixError::InvalidContainer("trailing data after payload".to_string()));
        }

        let matrix = PixelMatrix::new(header.width, header.height, header.channels, data)?;
        Ok((header, matrix))
    }

    /// Open and parse a container file
    pub fn read_path<P: AsRef<Path>>(path: P) -> MatrixResult<(ContainerHeader, PixelMatrix)> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        Self::read(&mut reader)
    }
}

fn truncated(e: std::io::Error) -> MatrixError {
    if e.kind() == ErrorKind::UnexpectedEof {
        MatrixError::InvalidContainer("truncated header".to_string())
    } else {
        MatrixError::IoError(e)
    }
}
