//! Decoded image frames
//!
//! A frame is one decoded image extracted from the container, together
//! with its position and the capability to encode itself to an output
//! format.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::convert::format::OutputFormat;
use crate::heic::errors::HeicResult;

/// One decoded image from the input container
///
/// The index is the zero-based position in the container, assigned at
/// decode time and immutable afterwards. Pixels are interleaved RGB8
/// with no row padding.
pub struct ImageFrame {
    /// Position of this image in the container
    pub index: usize,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Interleaved RGB8 pixel data, width * height * 3 bytes
    pub pixels: Vec<u8>,
}

impl ImageFrame {
    /// Create a frame from raw RGB8 pixel data
    pub fn new(index: usize, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        ImageFrame {
            index,
            width,
            height,
            pixels,
        }
    }

    /// Encode this frame to the requested output format
    ///
    /// # Arguments
    /// * `format` - Target raster format
    /// * `quality` - Compression quality in (0, 1], only meaningful for JPEG
    ///
    /// # Returns
    /// The encoded file bytes, or an error if encoding fails
    pub fn encode(&self, format: OutputFormat, quality: f32) -> HeicResult<Vec<u8>> {
        let mut encoded = Vec::new();

        match format {
            OutputFormat::Jpg => {
                // image expects 1..=100, the CLI surface uses (0, 1]
                let scaled = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
                let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut encoded), scaled);
                encoder.write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgb8)?;
            }
            OutputFormat::Png => {
                let encoder = PngEncoder::new(Cursor::new(&mut encoded));
                encoder.write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgb8)?;
            }
        }

        Ok(encoded)
    }
}
