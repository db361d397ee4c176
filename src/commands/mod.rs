//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod export_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use export_command::ExportCommand;
pub use inspect_command::InspectCommand;

use clap::ArgMatches;
use std::path::{Path, PathBuf};

use crate::dataset::DatasetConfig;
use crate::errors::{DatasetError, DatasetResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct FootprintCommandFactory;

impl FootprintCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FootprintCommandFactory
    }
}

impl Default for FootprintCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for FootprintCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> DatasetResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("export") {
            Ok(Box::new(ExportCommand::new(args, logger)?))
        } else {
            // Default to inspection
            Ok(Box::new(InspectCommand::new(args, logger)?))
        }
    }
}

/// Build a dataset config from CLI arguments
///
/// A `--config` manifest wins; otherwise the individual directory flags
/// must all be present.
pub fn config_from_args(args: &ArgMatches) -> DatasetResult<DatasetConfig> {
    if let Some(manifest) = args.get_one::<String>("config") {
        return DatasetConfig::from_file(Path::new(manifest));
    }

    let get_dir = |key: &str| -> DatasetResult<PathBuf> {
        args.get_one::<String>(key)
            .map(PathBuf::from)
            .ok_or_else(|| {
                DatasetError::GenericError(format!(
                    "Missing --{} (or use --config with a manifest)",
                    key
                ))
            })
    };

    let split = args
        .get_one::<String>("split")
        .cloned()
        .unwrap_or_else(|| "train".to_string());

    Ok(DatasetConfig::new(
        get_dir("img-dir")?,
        get_dir("ann-dir")?,
        get_dir("id-file")?,
        split,
    ))
}

/// Parse an optional numeric argument
///
/// # Arguments
/// * `args` - CLI argument matches from clap
/// * `key` - Argument name
///
/// # Returns
/// The parsed value, None if absent, or an error on malformed input
pub fn parse_optional_u64(args: &ArgMatches, key: &str) -> DatasetResult<Option<u64>> {
    match args.get_one::<String>(key) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DatasetError::GenericError(format!("Invalid --{} value: {}", key, raw))),
        None => Ok(None),
    }
}
