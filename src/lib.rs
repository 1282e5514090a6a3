pub mod io;
pub mod heic;
pub mod convert;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::HeicKit;

pub use heic::{HeicDecoder, HeicError, HeicResult, ImageFrame};
pub use convert::{Destination, OutputFormat, ResolvedSelection, SelectionSpec};
