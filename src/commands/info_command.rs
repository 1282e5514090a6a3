//! Container inspection command
//!
//! This module implements the `info` sub-mode: decode the container
//! and report the number of images and their dimensions, without
//! performing any encoding.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::heic::decoder::HeicDecoder;
use crate::heic::errors::{HeicError, HeicResult};
use crate::heic::frame::ImageFrame;
use crate::io::input;
use crate::utils::logger::Logger;

/// Render the container report
///
/// With `count_only` the result is the bare image count; otherwise a
/// summary line followed by one `index: WxH` line per image. The
/// caller appends the trailing newline when printing.
pub fn render_report(frames: &[ImageFrame], count_only: bool) -> String {
    if count_only {
        frames.len().to_string()
    } else {
        let mut report = format!("images: {}", frames.len());
        for frame in frames {
            report.push_str(&format!("\n{}: {}x{}", frame.index, frame.width, frame.height));
        }
        report
    }
}

/// Command for reporting container contents
pub struct InfoCommand<'a> {
    /// Input path, or `-` for stdin
    input: String,
    /// Print only the image count
    count_only: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InfoCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> HeicResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| HeicError::GenericError("Missing input file".to_string()))?
            .clone();

        let count_only = args.get_flag("count");

        Ok(InfoCommand {
            input,
            count_only,
            logger,
        })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> HeicResult<()> {
        let bytes = input::read_input(&self.input)?;

        let decoder = HeicDecoder::new();
        let frames = decoder.decode_all(&bytes)?;
        info!("Decoded {} image(s) for inspection", frames.len());

        // With --count this is exactly the integer and a newline
        println!("{}", render_report(&frames, self.count_only));

        self.logger.log("Info reported")?;

        Ok(())
    }
}
