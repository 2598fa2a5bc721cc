pub mod io;
pub mod matrix;
pub mod utils;
pub mod extractor;
pub mod encoder;
pub mod config;
pub mod commands;
pub mod api;

pub use crate::api::{ConversionSummary, ImageMatrix};

pub use matrix::{ContainerHeader, ContainerReader, MatrixError, MatrixResult, PixelMatrix, PixelMode};
pub use extractor::{FileSource, ImageSource, MemorySource, PixelExtractor};
pub use encoder::{BinaryEncoder, EncoderFactory, JsonEncoder, MatrixEncoder, OutputTarget};
pub use config::Config;
