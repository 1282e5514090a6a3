//! Custom error types for HEIC conversion

use std::fmt;
use std::io;

/// Conversion-specific error types
#[derive(Debug)]
pub enum HeicError {
    /// I/O error while acquiring input
    IoError(io::Error),
    /// Input bytes are not a recognized HEIC/HEIF container
    InvalidContainer(String),
    /// Output format is not one of the accepted identifiers
    UnknownFormat(String),
    /// Compression quality outside the accepted (0, 1] interval
    QualityOutOfRange(f32),
    /// Requested image index outside the decoded range
    SelectionOutOfRange { requested: i64, total: usize },
    /// More than one image routed to the single output stream
    MultiImageToStream { count: usize },
    /// Writing one planned output failed
    WriteFailed {
        path: String,
        image_index: usize,
        source: io::Error,
    },
    /// Encoding a decoded frame to the target format failed
    EncodeFailed(image::ImageError),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for HeicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeicError::IoError(e) => write!(f, "I/O error: {}", e),
            HeicError::InvalidContainer(msg) => {
                write!(f, "input is not a HEIC image: {}", msg)
            }
            HeicError::UnknownFormat(given) => {
                write!(f, "unknown output format '{}', accepted values: jpg, png", given)
            }
            HeicError::QualityOutOfRange(q) => {
                write!(f, "quality must be greater than 0 and at most 1, got {}", q)
            }
            HeicError::SelectionOutOfRange { requested, total } => {
                write!(
                    f,
                    "image index {} is out of range, the container holds {} image(s)",
                    requested, total
                )
            }
            HeicError::MultiImageToStream { count } => {
                write!(
                    f,
                    "cannot write {} images to standard output, use an output template with a %s placeholder",
                    count
                )
            }
            HeicError::WriteFailed {
                path,
                image_index,
                source,
            } => {
                write!(f, "failed to write image {} to '{}': {}", image_index, path, source)
            }
            HeicError::EncodeFailed(e) => write!(f, "encoding failed: {}", e),
            HeicError::GenericError(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for HeicError {}

impl From<io::Error> for HeicError {
    fn from(error: io::Error) -> Self {
        HeicError::IoError(error)
    }
}

impl From<String> for HeicError {
    fn from(msg: String) -> Self {
        HeicError::GenericError(msg)
    }
}

impl From<libheif_rs::HeifError> for HeicError {
    fn from(error: libheif_rs::HeifError) -> Self {
        HeicError::InvalidContainer(error.to_string())
    }
}

impl From<image::ImageError> for HeicError {
    fn from(error: image::ImageError) -> Self {
        HeicError::EncodeFailed(error)
    }
}

/// Result type for conversion operations
pub type HeicResult<T> = Result<T, HeicError>;
