//! CLI command implementations
//!
//! This module contains the command-line definition and the conversion
//! command driven by it.

pub mod command_traits;
pub mod convert_command;
mod cli;

pub use command_traits::Command;
pub use convert_command::ConvertCommand;
pub use cli::build_cli;
