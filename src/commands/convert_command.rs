//! Image to matrix conversion command
//!
//! Validates the mode and the output selection up front, then decodes the
//! input, prints the summary line, writes the output and confirms it.

use clap::ArgMatches;
use log::info;

use crate::api::{confirmation, ConversionSummary, ImageMatrix};
use crate::commands::command_traits::Command;
use crate::config::Config;
use crate::encoder::OutputTarget;
use crate::extractor::{FileSource, ImageSource};
use crate::matrix::{MatrixError, MatrixResult, PixelMode};
use crate::utils::logger::Logger;

/// Command for converting an image file to a matrix file
pub struct ConvertCommand {
    /// Input image
    source: FileSource,
    /// Validated pixel mode
    mode: PixelMode,
    /// Output destination
    target: OutputTarget,
    /// Publish outputs atomically
    atomic_writes: bool,
    /// Run log
    logger: Logger,
}

impl ConvertCommand {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the configuration file
    ///
    /// # Returns
    /// A new ConvertCommand, `InvalidMode`, or `UsageError`
    pub fn new(args: &ArgMatches, config: &Config) -> MatrixResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| MatrixError::UsageError("Missing input file".to_string()))?;

        let mode_name = args.get_one::<String>("mode")
            .map(String::as_str)
            .or(config.mode.as_deref())
            .unwrap_or(PixelMode::default().name());
        let mode: PixelMode = mode_name.parse()?;
        info!("Pixel mode: {}", mode);

        let target = OutputTarget::from_options(
            args.get_one::<String>("json").map(String::as_str),
            args.get_one::<String>("bin").map(String::as_str),
        )?;
        info!("Output: {:?}", target);

        let logger = Logger::from_option(config.log_file.as_deref())?;

        Ok(ConvertCommand {
            source: FileSource::new(input_file),
            mode,
            target,
            atomic_writes: config.atomic_writes,
            logger,
        })
    }

    pub fn mode(&self) -> PixelMode {
        self.mode
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }
}

impl Command for ConvertCommand {
    fn execute(&self) -> MatrixResult<()> {
        info!("Converting {} with mode {}", self.source.describe(), self.mode);

        let imatrix = ImageMatrix::new(&self.logger, self.atomic_writes);

        let matrix = imatrix.load(&self.source, self.mode)?;
        println!("{}", ConversionSummary::new(&self.source.describe(), self.mode, &matrix));

        imatrix.write(&matrix, &self.target)?;
        println!("{}", confirmation(&self.target));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;

    fn command(args: &[&str], config: &Config) -> MatrixResult<ConvertCommand> {
        let mut argv = vec!["imatrix"];
        argv.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        ConvertCommand::new(&matches, config)
    }

    #[test]
    fn test_default_mode_is_rgb() {
        let cmd = command(&["in.png", "--json", "out.json"], &Config::default()).unwrap();
        assert_eq!(cmd.mode(), PixelMode::Rgb);
        assert_eq!(cmd.target(), &OutputTarget::Json("out.json".into()));
    }

    #[test]
    fn test_config_mode_applies_without_flag() {
        let config = Config { mode: Some("L".to_string()), ..Config::default() };
        let cmd = command(&["in.png", "--bin", "out.bin"], &config).unwrap();
        assert_eq!(cmd.mode(), PixelMode::Luma);
    }

    #[test]
    fn test_flag_overrides_config_mode() {
        let config = Config { mode: Some("L".to_string()), ..Config::default() };
        let cmd = command(&["in.png", "--mode", "RGBA", "--bin", "out.bin"], &config).unwrap();
        assert_eq!(cmd.mode(), PixelMode::Rgba);
    }

    #[test]
    fn test_invalid_mode() {
        let result = command(&["in.png", "--mode", "XYZ", "--json", "out.json"], &Config::default());
        assert!(matches!(result, Err(MatrixError::InvalidMode(m)) if m == "XYZ"));
    }

    #[test]
    fn test_both_outputs_is_usage_error() {
        let result = command(&["in.png", "--json", "a.json", "--bin", "a.bin"], &Config::default());
        assert!(matches!(result, Err(MatrixError::UsageError(_))));
    }

    #[test]
    fn test_no_output_is_usage_error() {
        let result = command(&["in.png"], &Config::default());
        assert!(matches!(result, Err(MatrixError::UsageError(_))));
    }

    #[test]
    fn test_missing_input_is_rejected_by_clap() {
        assert!(build_cli().try_get_matches_from(["imatrix", "--json", "a.json"]).is_err());
    }
}
