//! HEIC container decoding module
//!
//! This module provides the decode gateway that turns raw container
//! bytes into an ordered sequence of decoded image frames.

pub mod decoder;
pub mod errors;
pub mod frame;

pub use decoder::HeicDecoder;
pub use errors::{HeicError, HeicResult};
pub use frame::ImageFrame;
