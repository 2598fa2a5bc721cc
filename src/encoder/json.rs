//! JSON matrix documents
//!
//! A document is a single compact object with exactly the keys `width`,
//! `height`, `channels` and `data`, where `data` is the flat payload as an
//! array of integers.

use log::debug;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::matrix::{MatrixResult, PixelMatrix};
use super::handler::MatrixEncoder;

/// Borrowed view serialized on encode
#[derive(Serialize)]
struct JsonMatrixRef<'a> {
    width: u32,
    height: u32,
    channels: u32,
    data: &'a [u8],
}

/// Owned document parsed on decode
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonMatrix {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

/// Encoder for `{width, height, channels, data}` JSON documents
pub struct JsonEncoder;

impl JsonEncoder {
    /// Parse a JSON matrix document
    ///
    /// Missing or extra keys, out-of-range samples and a payload that does
    /// not match the dimensions are all rejected.
    pub fn decode(reader: impl Read) -> MatrixResult<PixelMatrix> {
        let doc: JsonMatrix = serde_json::from_reader(reader)?;
        PixelMatrix::new(doc.width, doc.height, doc.channels, doc.data)
    }
}

impl MatrixEncoder for JsonEncoder {
    fn encode(&self, matrix: &PixelMatrix, writer: &mut dyn Write) -> MatrixResult<()> {
        let doc = JsonMatrixRef {
            width: matrix.width(),
            height: matrix.height(),
            channels: matrix.channels(),
            data: matrix.data(),
        };
        serde_json::to_writer(writer, &doc)?;
        debug!("Encoded {} samples as JSON", matrix.byte_len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn label(&self) -> &'static str {
        "JSON"
    }
}
