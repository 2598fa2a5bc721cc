//! Pixel matrix data model
//!
//! This module holds the matrix entity shared by the extractor and the
//! encoders, the pixel mode enumeration, the IMAT container constants and
//! reader, and the error taxonomy.

pub mod errors;
pub mod mode;
pub mod pixel_matrix;
pub mod reader;
pub(crate) mod constants;
mod tests;

pub use errors::{MatrixError, MatrixResult};
pub use mode::PixelMode;
pub use pixel_matrix::PixelMatrix;
pub use reader::{ContainerHeader, ContainerReader};

pub use constants::header::{DEPTH, MAGIC, SIZE as HEADER_SIZE, VERSION};
