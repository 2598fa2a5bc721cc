//! Matrix encoder trait definition

use std::io::Write;

use crate::matrix::{MatrixResult, PixelMatrix};

/// Strategy trait for serializing a pixel matrix
pub trait MatrixEncoder: Send + Sync {
    /// Serialize the matrix into the writer
    fn encode(&self, matrix: &PixelMatrix, writer: &mut dyn Write) -> MatrixResult<()>;

    /// Serialize the matrix into a new buffer
    fn encode_to_vec(&self, matrix: &PixelMatrix) -> MatrixResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(matrix, &mut buffer)?;
        Ok(buffer)
    }

    /// Get the name of this output format
    fn name(&self) -> &'static str;

    /// Short tag used in the confirmation line ("JSON", "BIN")
    fn label(&self) -> &'static str;
}
