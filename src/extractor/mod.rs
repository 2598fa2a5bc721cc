//! Pixel extraction from decoded raster images
//!
//! Decoding is delegated to the `image` crate through the [`ImageSource`]
//! seam; [`PixelExtractor`] normalizes the result into a [`PixelMatrix`].
//!
//! [`PixelMatrix`]: crate::matrix::PixelMatrix

mod pixel_extractor;
mod source;

pub use pixel_extractor::PixelExtractor;
pub use source::{FileSource, ImageSource, MemorySource};
