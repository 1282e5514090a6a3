//! HEIC conversion command
//!
//! This module implements the default command: decode the input
//! container, resolve the requested image selection, route the selected
//! images to their destinations and write them in the target format.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::convert::format::{validate_quality, OutputFormat};
use crate::convert::routing::{self, Destination};
use crate::convert::selection::{self, SelectionSpec};
use crate::heic::decoder::HeicDecoder;
use crate::heic::errors::{HeicError, HeicResult};
use crate::io::{input, STDIO_SENTINEL};
use crate::utils::logger::Logger;

/// Command for converting HEIC containers to JPEG or PNG
pub struct ConvertCommand<'a> {
    /// Input path, or `-` for stdin
    input: String,
    /// Output destination resolved from the CLI sentinel
    destination: Destination,
    /// Target raster format
    format: OutputFormat,
    /// Compression quality in (0, 1]
    quality: f32,
    /// Requested image indices
    selection: SelectionSpec,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// Flag validation happens here, before any I/O or decoding, so
    /// every argument error is reported before partial work starts.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> HeicResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| HeicError::GenericError("Missing input file".to_string()))?
            .clone();

        let output = args.get_one::<String>("output")
            .ok_or_else(|| HeicError::GenericError("Missing output file".to_string()))?
            .clone();

        let destination = if output == STDIO_SENTINEL {
            Destination::Stream
        } else {
            Destination::Path(output)
        };

        let format = OutputFormat::parse(
            args.get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("jpg"),
        )?;

        let quality = validate_quality(*args.get_one::<f32>("quality").unwrap_or(&1.0))?;

        let requested: Option<Vec<i64>> = args
            .get_many::<i64>("images")
            .map(|values| values.copied().collect());
        let selection = SelectionSpec::from_requested(requested.as_deref());

        Ok(ConvertCommand {
            input,
            destination,
            format,
            quality,
            selection,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> HeicResult<()> {
        info!("Converting {} to {} (quality {})",
              self.input, self.format.name(), self.quality);

        let bytes = input::read_input(&self.input)?;

        let decoder = HeicDecoder::new();
        let frames = decoder.decode_all(&bytes)?;
        info!("Decoded {} image(s)", frames.len());

        let resolved = selection::resolve(&self.selection, frames.len())?;
        let plan = routing::route(&resolved, &self.destination)?;

        routing::execute(&plan, &frames, self.format, self.quality)?;

        info!("Conversion successful");
        self.logger.log("Conversion successful")?;

        Ok(())
    }
}
