//! Tests for format and quality validation

extern crate std;

use crate::convert::format::{validate_quality, OutputFormat};
use crate::heic::errors::HeicError;

#[test]
fn test_canonical_names_parse() {
    std::assert_eq!(OutputFormat::parse("jpg").unwrap(), OutputFormat::Jpg);
    std::assert_eq!(OutputFormat::parse("png").unwrap(), OutputFormat::Png);
}

#[test]
fn test_jpeg_alias_normalizes() {
    std::assert_eq!(OutputFormat::parse("jpeg").unwrap(), OutputFormat::Jpg);
    std::assert_eq!(OutputFormat::parse("JPEG").unwrap(), OutputFormat::Jpg);
    std::assert_eq!(OutputFormat::parse("Jpeg").unwrap(), OutputFormat::Jpg);
}

#[test]
fn test_parse_is_case_insensitive() {
    std::assert_eq!(OutputFormat::parse("PNG").unwrap(), OutputFormat::Png);
    std::assert_eq!(OutputFormat::parse("JPG").unwrap(), OutputFormat::Jpg);
}

#[test]
fn test_unknown_format_is_rejected() {
    match OutputFormat::parse("pineapples") {
        Err(HeicError::UnknownFormat(given)) => std::assert_eq!(given, "pineapples"),
        _ => std::panic!("expected UnknownFormat"),
    }
}

#[test]
fn test_quality_bounds() {
    // (0, 1]: both ends behave differently
    std::assert!(validate_quality(0.0).is_err());
    std::assert!(validate_quality(1.01).is_err());
    std::assert!(validate_quality(-0.5).is_err());

    std::assert_eq!(validate_quality(0.01).unwrap(), 0.01);
    std::assert_eq!(validate_quality(1.0).unwrap(), 1.0);
}
