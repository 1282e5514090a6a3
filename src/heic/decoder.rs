//! HEIC container decoding
//!
//! This module wraps libheif and turns a raw byte buffer into the
//! ordered sequence of decoded frames the rest of the pipeline works
//! with. Frames are decoded in container order and their index is
//! assigned positionally, once, at decode time.

use libheif_rs::{ColorSpace, HeifContext, ItemId, LibHeif, RgbChroma};
use log::debug;

use crate::heic::errors::{HeicError, HeicResult};
use crate::heic::frame::ImageFrame;

/// Decoder for HEIC/HEIF containers
pub struct HeicDecoder {
    lib_heif: LibHeif,
}

impl HeicDecoder {
    /// Create a new decoder instance
    pub fn new() -> Self {
        HeicDecoder {
            lib_heif: LibHeif::new(),
        }
    }

    /// Decode every top-level image in the container
    ///
    /// # Arguments
    /// * `bytes` - The complete container file contents
    ///
    /// # Returns
    /// All decoded frames in container order, or an error if the bytes
    /// are not a valid HEIC container
    pub fn decode_all(&self, bytes: &[u8]) -> HeicResult<Vec<ImageFrame>> {
        let context = HeifContext::read_from_bytes(bytes)?;

        let count = context.number_of_top_level_images();
        debug!("Container holds {} top-level image(s)", count);

        let mut item_ids: Vec<ItemId> = vec![0; count];
        let filled = context.top_level_image_ids(&mut item_ids);
        item_ids.truncate(filled);

        let mut frames = Vec::with_capacity(item_ids.len());
        for (index, item_id) in item_ids.iter().enumerate() {
            let handle = context.image_handle(*item_id)?;
            let image = self
                .lib_heif
                .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)?;

            let width = image.width();
            let height = image.height();

            let planes = image.planes();
            let interleaved = planes.interleaved.ok_or_else(|| {
                HeicError::InvalidContainer("decoded image has no interleaved RGB plane".to_string())
            })?;

            // The decoded rows may carry padding, copy only width * 3
            // bytes per row so frames hold tightly packed pixels.
            let row_bytes = width as usize * 3;
            let mut pixels = Vec::with_capacity(row_bytes * height as usize);
            for row in 0..height as usize {
                let start = row * interleaved.stride;
                pixels.extend_from_slice(&interleaved.data[start..start + row_bytes]);
            }

            debug!("Decoded image {}: {}x{}", index, width, height);
            frames.push(ImageFrame::new(index, width, height, pixels));
        }

        Ok(frames)
    }
}

impl Default for HeicDecoder {
    fn default() -> Self {
        HeicDecoder::new()
    }
}
