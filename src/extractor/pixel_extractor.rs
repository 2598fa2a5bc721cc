//! Pixel extraction from decoded images
//!
//! Converts a decoded image into the requested pixel mode and flattens it
//! into a row-major, channel-interleaved byte payload.

use image::{DynamicImage, ImageBuffer, Pixel};
use log::{debug, info};

use crate::matrix::{MatrixResult, PixelMatrix, PixelMode};

use super::source::ImageSource;

/// Extracts pixel matrices from decoded images
pub struct PixelExtractor;

impl PixelExtractor {
    /// Convert a decoded image to `mode` and flatten it
    ///
    /// Color conversion (alpha dropping, opaque alpha synthesis, luminance)
    /// follows the `image` crate's standard conversions.
    ///
    /// # Arguments
    /// * `image` - Decoded source image
    /// * `mode` - Target pixel mode
    ///
    /// # Returns
    /// The flattened matrix with `channels` taken from `mode`
    pub fn extract(image: &DynamicImage, mode: PixelMode) -> MatrixResult<PixelMatrix> {
        debug!("Converting {:?} image to mode {}", image.color(), mode);

        match mode {
            PixelMode::Luma => flatten(image.to_luma8()),
            PixelMode::Rgb => flatten(image.to_rgb8()),
            PixelMode::Rgba => flatten(image.to_rgba8()),
        }
    }

    /// Validate `mode`, decode `source` and extract its pixel matrix
    ///
    /// The mode string is checked before the source is touched, so an
    /// invalid mode never causes any file I/O.
    ///
    /// # Arguments
    /// * `source` - Where to read the encoded image from
    /// * `mode` - Mode name: "L", "RGB" or "RGBA"
    ///
    /// # Returns
    /// The extracted matrix, `InvalidMode`, or `DecodeError`
    pub fn extract_from(source: &dyn ImageSource, mode: &str) -> MatrixResult<PixelMatrix> {
        let mode: PixelMode = mode.parse()?;
        Self::extract_from_source(source, mode)
    }

    /// Decode `source` and extract its pixel matrix in an already validated mode
    pub fn extract_from_source(source: &dyn ImageSource, mode: PixelMode) -> MatrixResult<PixelMatrix> {
        let image = source.decode()?;
        let matrix = Self::extract(&image, mode)?;

        info!("Extracted {} ({}x{}x{}, {} bytes)",
              source.describe(), matrix.width(), matrix.height(), matrix.channels(), matrix.byte_len());

        Ok(matrix)
    }
}

/// Flatten a buffer of fixed-width pixels into a matrix
///
/// `ImageBuffer` stores its samples row-major and channel-interleaved, which
/// is exactly the payload layout.
fn flatten<P>(buffer: ImageBuffer<P, Vec<u8>>) -> MatrixResult<PixelMatrix>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = buffer.dimensions();
    let channels = u32::from(P::CHANNEL_COUNT);
    PixelMatrix::new(width, height, channels, buffer.into_raw())
}
