//! IMAT binary container encoder
//!
//! Layout, all integers little-endian:
//!
//! | Offset | Size    | Field    |
//! |-------:|--------:|----------|
//! | 0      | 4       | `IMAT`   |
//! | 4      | 4       | version  |
//! | 8      | 4       | width    |
//! | 12     | 4       | height   |
//! | 16     | 4       | channels |
//! | 20     | 4       | depth    |
//! | 24     | w*h*c   | payload  |
//!
//! No padding, checksum or trailing data.

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;
use std::io::Write;

use crate::matrix::constants::header;
use crate::matrix::{MatrixResult, PixelMatrix};
use super::handler::MatrixEncoder;

/// Encoder for the IMAT binary container
pub struct BinaryEncoder;

impl BinaryEncoder {
    /// Write only the 24-byte header
    pub fn write_header(matrix: &PixelMatrix, writer: &mut dyn Write) -> MatrixResult<()> {
        writer.write_all(header::MAGIC)?;
        writer.write_u32::<LittleEndian>(header::VERSION)?;
        writer.write_u32::<LittleEndian>(matrix.width())?;
        writer.write_u32::<LittleEndian>(matrix.height())?;
        writer.write_u32::<LittleEndian>(matrix.channels())?;
        writer.write_u32::<LittleEndian>(matrix.depth())?;
        Ok(())
    }
}

impl MatrixEncoder for BinaryEncoder {
    fn encode(&self, matrix: &PixelMatrix, writer: &mut dyn Write) -> MatrixResult<()> {
        Self::write_header(matrix, writer)?;
        writer.write_all(matrix.data())?;
        debug!("Encoded {} byte IMAT container", header::SIZE + matrix.byte_len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bin"
    }

    fn label(&self) -> &'static str {
        "BIN"
    }
}
