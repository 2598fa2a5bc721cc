//! I/O utilities for file handling
//!
//! This module provides output file writing with optional atomic publish.

pub mod output;

pub use output::{write_file, OutputFile};
