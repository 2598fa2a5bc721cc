//! The flattened pixel matrix produced by extraction

use super::constants::{channels, header};
use super::errors::{MatrixError, MatrixResult};

/// Row-major, channel-interleaved pixel payload with its dimensions
///
/// A `PixelMatrix` can only be built through [`PixelMatrix::new`], which
/// guarantees `data.len() == width * height * channels`. Encoders rely on
/// that and never re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl PixelMatrix {
    /// Create a matrix, validating the channel count and payload length
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Channels per pixel (1, 3 or 4)
    /// * `data` - Flattened payload
    ///
    /// # Returns
    /// The matrix, or `InvalidLength` if the payload does not fit the dimensions
    pub fn new(width: u32, height: u32, channels: u32, data: Vec<u8>) -> MatrixResult<Self> {
        if !matches!(channels, channels::LUMA | channels::RGB | channels::RGBA) {
            return Err(MatrixError::InvalidChannels(channels));
        }

        let expected = Self::expected_len(width, height, channels).ok_or(MatrixError::InvalidLength {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(MatrixError::InvalidLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(PixelMatrix {
            width,
            height,
            channels,
            data,
        })
    }

    /// Payload length implied by the dimensions, or None on overflow
    pub fn expected_len(width: u32, height: u32, channels: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(channels as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Bits per channel; always 8
    pub fn depth(&self) -> u32 {
        header::DEPTH
    }

    /// Flattened payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload size in bytes
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Get the channel values of a single pixel
    ///
    /// # Returns
    /// The pixel's channels, or None if out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let c = self.channels as usize;
        let idx = (y as usize * self.width as usize + x as usize) * c;
        self.data.get(idx..idx + c)
    }

    /// Consume the matrix and return its payload
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
