//! CLI command implementations
//!
//! This module contains the command definition of the `bound` binary
//! and its implementation using the Command pattern.

pub mod command_traits;
pub mod bound_command;

pub use command_traits::Command;
pub use bound_command::BoundCommand;

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::config::COORDINATE_ARGS;

/// Builds the command line definition
///
/// Positional arguments are optional at the clap level so that missing
/// values are reported through the tool's own fatal-error messages.
pub fn build_cli() -> ClapCommand {
    let coordinate_help = [
        "Latitude of the top-left corner",
        "Longitude of the top-left corner",
        "Latitude of the bottom-right corner",
        "Longitude of the bottom-right corner",
    ];

    let mut command = ClapCommand::new("bound")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy images whose EXIF GPS position lies inside a latitude/longitude rectangle")
        .arg(
            Arg::new("source")
                .help("Directory to scan, without a trailing separator")
                .index(1),
        )
        .arg(
            Arg::new("destination")
                .help("Existing directory to copy matches into, without a trailing separator")
                .index(2),
        );

    let value_names = ["LAT_TL", "LON_TL", "LAT_BR", "LON_BR"];

    for (i, name) in COORDINATE_ARGS.iter().enumerate() {
        command = command.arg(
            Arg::new(*name)
                .help(coordinate_help[i])
                .value_name(value_names[i])
                .allow_negative_numbers(true)
                .index(i + 3),
        );
    }

    command
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file instead of stderr")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Report matching files without copying them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar on stderr")
                .action(ArgAction::SetTrue),
        )
}
