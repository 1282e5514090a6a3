//! Conversion core
//!
//! This module holds the selection resolver, the output router and the
//! encode parameter validation that together decide which decoded
//! images go where.

pub mod format;
pub mod routing;
pub mod selection;
#[cfg(test)]
mod tests;

pub use format::{validate_quality, OutputFormat};
pub use routing::{route, execute, Destination, OutputPlan, OutputTarget, PlannedWrite};
pub use selection::{resolve, ResolvedSelection, SelectionSpec};
