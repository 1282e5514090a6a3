//! I/O utilities for input and output handling
//!
//! This module provides the file/stdin input acquisition and the
//! file/stdout output sinks.

pub mod input;
pub mod output;

pub use input::{read_input, STDIO_SENTINEL};
