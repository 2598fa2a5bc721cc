//! Factory for creating matrix encoders

use super::binary::BinaryEncoder;
use super::handler::MatrixEncoder;
use super::json::JsonEncoder;
use super::target::OutputTarget;

/// Factory for creating matrix encoders
pub struct EncoderFactory;

impl EncoderFactory {
    /// Create the encoder matching an output target
    pub fn create_encoder(target: &OutputTarget) -> Box<dyn MatrixEncoder> {
        match target {
            OutputTarget::Json(_) => Box::new(JsonEncoder),
            OutputTarget::Binary(_) => Box::new(BinaryEncoder),
        }
    }
}
