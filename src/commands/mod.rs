//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod info_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use info_command::InfoCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::heic::errors::HeicResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct HeickitCommandFactory;

impl HeickitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        HeickitCommandFactory
    }
}

impl Default for HeickitCommandFactory {
    fn default() -> Self {
        HeickitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for HeickitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> HeicResult<Box<dyn Command + 'a>> {
        // The info sub-mode only inspects; everything else converts
        if let Some(info_args) = args.subcommand_matches("info") {
            Ok(Box::new(InfoCommand::new(info_args, logger)?))
        } else {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        }
    }
}
