//! Pixel modes supported by the extractor

use std::fmt;
use std::str::FromStr;

use super::constants::channels;
use super::errors::MatrixError;

/// Target channel layout requested for extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelMode {
    /// Single-channel luminance
    Luma,
    /// Red, green, blue
    #[default]
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl PixelMode {
    /// All supported modes, in CLI order
    pub const ALL: [PixelMode; 3] = [PixelMode::Luma, PixelMode::Rgb, PixelMode::Rgba];

    /// Returns the mode name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            PixelMode::Luma => "L",
            PixelMode::Rgb => "RGB",
            PixelMode::Rgba => "RGBA",
        }
    }

    /// Number of bytes each pixel contributes in this mode
    pub fn channels(&self) -> u32 {
        match self {
            PixelMode::Luma => channels::LUMA,
            PixelMode::Rgb => channels::RGB,
            PixelMode::Rgba => channels::RGBA,
        }
    }
}

impl FromStr for PixelMode {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-sensitive, like the CLI choices
        match s {
            "L" => Ok(PixelMode::Luma),
            "RGB" => Ok(PixelMode::Rgb),
            "RGBA" => Ok(PixelMode::Rgba),
            other => Err(MatrixError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
