//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `imatrix` binary
///
/// Mode and output selection are validated by [`ConvertCommand`] rather than
/// by clap so that they report `InvalidMode` and `UsageError`.
///
/// [`ConvertCommand`]: super::ConvertCommand
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("imatrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert an image to a pixel matrix (JSON or IMAT binary)")
        .arg(
            Arg::new("input")
                .help("Path to input image (PNG, JPEG and other decodable formats)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .help("Pixel mode: L, RGB or RGBA [default: RGB]")
                .value_name("MODE")
                .required(false),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Write JSON {width,height,channels,data}")
                .value_name("OUT.json")
                .required(false),
        )
        .arg(
            Arg::new("bin")
                .long("bin")
                .help("Write compact IMAT binary file")
                .value_name("OUT.bin")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
