use log::info;

use crate::convert::format::{validate_quality, OutputFormat};
use crate::convert::routing::{self, Destination};
use crate::convert::selection::{self, SelectionSpec};
use crate::heic::decoder::HeicDecoder;
use crate::heic::errors::HeicResult;
use crate::io::{input, STDIO_SENTINEL};
use crate::utils::logger::Logger;

/// Main interface to the heickit library
pub struct HeicKit {
    logger: Logger,
}

impl HeicKit {
    /// Create a new HeicKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file; no file is written when absent
    ///
    /// # Returns
    /// A HeicKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> HeicResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(HeicKit { logger })
    }

    /// Convert images from a HEIC container
    ///
    /// # Arguments
    /// * `input` - Path to the input file, or `-` for stdin
    /// * `output` - Output path or template with `%s`, or `-` for stdout
    /// * `format` - Output format identifier ("jpg", "jpeg" or "png")
    /// * `quality` - Compression quality in (0, 1]
    /// * `images` - Requested image indices, `[-1]` for all; an absent
    ///   or empty list selects the first image
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn convert(
        &self,
        input: &str,
        output: &str,
        format: &str,
        quality: f32,
        images: Option<&[i64]>,
    ) -> HeicResult<()> {
        let format = OutputFormat::parse(format)?;
        let quality = validate_quality(quality)?;

        let spec = SelectionSpec::from_requested(images);

        let destination = if output == STDIO_SENTINEL {
            Destination::Stream
        } else {
            Destination::Path(output.to_string())
        };

        let bytes = input::read_input(input)?;
        let frames = HeicDecoder::new().decode_all(&bytes)?;
        info!("Decoded {} image(s) from {}", frames.len(), input);

        let resolved = selection::resolve(&spec, frames.len())?;
        let plan = routing::route(&resolved, &destination)?;
        routing::execute(&plan, &frames, format, quality)?;

        self.logger.log("Conversion successful")?;
        Ok(())
    }

    /// Report the dimensions of every image in a HEIC container
    ///
    /// # Arguments
    /// * `input` - Path to the input file, or `-` for stdin
    ///
    /// # Returns
    /// One `(width, height)` pair per image, in container order
    pub fn info(&self, input: &str) -> HeicResult<Vec<(u32, u32)>> {
        let bytes = input::read_input(input)?;
        let frames = HeicDecoder::new().decode_all(&bytes)?;

        Ok(frames.iter().map(|f| (f.width, f.height)).collect())
    }
}
