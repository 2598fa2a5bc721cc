//! Tests for pixel mode parsing

use crate::matrix::{MatrixError, PixelMode};

#[test]
fn test_parse_known_modes() {
    assert_eq!("L".parse::<PixelMode>().unwrap(), PixelMode::Luma);
    assert_eq!("RGB".parse::<PixelMode>().unwrap(), PixelMode::Rgb);
    assert_eq!("RGBA".parse::<PixelMode>().unwrap(), PixelMode::Rgba);
}

#[test]
fn test_parse_is_case_sensitive() {
    assert!(matches!("rgb".parse::<PixelMode>(), Err(MatrixError::InvalidMode(_))));
}

#[test]
fn test_parse_unknown_mode() {
    let err = "XYZ".parse::<PixelMode>().unwrap_err();
    assert!(matches!(err, MatrixError::InvalidMode(ref m) if m == "XYZ"));
    assert!(err.to_string().contains("L, RGB, RGBA"));
}

#[test]
fn test_channels_per_mode() {
    assert_eq!(PixelMode::Luma.channels(), 1);
    assert_eq!(PixelMode::Rgb.channels(), 3);
    assert_eq!(PixelMode::Rgba.channels(), 4);
}

#[test]
fn test_name_round_trips_through_parse() {
    for mode in PixelMode::ALL {
        assert_eq!(mode.name().parse::<PixelMode>().unwrap(), mode);
        assert_eq!(mode.to_string(), mode.name());
    }
}

#[test]
fn test_default_is_rgb() {
    assert_eq!(PixelMode::default(), PixelMode::Rgb);
}
