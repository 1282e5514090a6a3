//! Command pattern interfaces
//!
//! Each CLI mode (convert, info) is one Command object built by a
//! factory from the parsed arguments. The binary entry point only
//! knows how to create a command and execute it.

use crate::utils::logger::Logger;
use crate::heic::errors::HeicResult;

/// One executable CLI operation
///
/// A command captures everything it needs at construction time, so
/// executing it takes no further input and argument errors surface
/// before any work starts.
pub trait Command {
    /// Run the operation
    ///
    /// # Returns
    /// Ok on success, or the error to report at the process boundary
    fn execute(&self) -> HeicResult<()>;
}

/// Builds the right command for a set of parsed arguments
pub trait CommandFactory<'a> {
    /// Pick and construct the command the arguments ask for
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger the command records its operations with
    ///
    /// # Returns
    /// The command to execute, or an error if the arguments are invalid
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> HeicResult<Box<dyn Command + 'a>>;
}
