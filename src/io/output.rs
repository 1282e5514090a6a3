//! Output sinks
//!
//! Writes encoded bytes either to a file or to standard output. The
//! stdout path is only ever taken for a single image per invocation,
//! enforced by the router.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write encoded bytes to standard output
pub fn write_stream(bytes: &[u8]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(bytes)?;
    handle.flush()
}

/// Write encoded bytes to a file, creating or overwriting it
pub fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
