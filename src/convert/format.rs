//! Output format and quality validation
//!
//! Pure validation of the encode parameters. This runs once, before any
//! decoding or routing, so that every flag error is reported before any
//! partial work happens.

use crate::heic::errors::{HeicError, HeicResult};

/// Accepted output raster formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpg,
    Png,
}

impl OutputFormat {
    /// Parse a format identifier from the CLI surface
    ///
    /// Matching is case-insensitive and the common alias "jpeg"
    /// normalizes to the canonical short name.
    ///
    /// # Arguments
    /// * `value` - The raw flag value
    ///
    /// # Returns
    /// The parsed format, or an error naming the accepted set
    pub fn parse(value: &str) -> HeicResult<Self> {
        match value.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(HeicError::UnknownFormat(value.to_string())),
        }
    }

    /// Canonical short name of this format
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// Validate a compression quality value
///
/// The accepted interval is (0, 1]: exactly 0 is rejected, 1 is the
/// maximum. Values outside the interval fail before any image is
/// touched.
pub fn validate_quality(quality: f32) -> HeicResult<f32> {
    if quality > 0.0 && quality <= 1.0 {
        Ok(quality)
    } else {
        Err(HeicError::QualityOutOfRange(quality))
    }
}
