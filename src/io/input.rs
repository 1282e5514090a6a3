//! Input acquisition
//!
//! Reads the complete input either from a file path or from standard
//! input when the `-` sentinel is given.

use std::fs;
use std::io::{self, Read};

use log::debug;

/// Sentinel meaning "use the standard stream" on the CLI surface
pub const STDIO_SENTINEL: &str = "-";

/// Read the full input bytes for the given CLI value
///
/// # Arguments
/// * `input` - A file path, or `-` to read standard input to the end
///
/// # Returns
/// The complete byte buffer or an I/O error
pub fn read_input(input: &str) -> io::Result<Vec<u8>> {
    if input == STDIO_SENTINEL {
        debug!("Reading input from stdin");
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        debug!("Reading input file {}", input);
        fs::read(input)
    }
}
