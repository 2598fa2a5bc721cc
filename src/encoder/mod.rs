//! Pixel matrix serialization
//!
//! This module implements the two output formats, JSON documents and the
//! IMAT binary container, behind the [`MatrixEncoder`] strategy trait.

mod handler;
mod json;
mod binary;
mod target;
mod factory;

pub use handler::MatrixEncoder;
pub use json::JsonEncoder;
pub use binary::BinaryEncoder;
pub use target::OutputTarget;
pub use factory::EncoderFactory;
