//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod curve_command;
pub mod preview_command;
pub mod animate_command;

pub use command_traits::{Command, CommandFactory};
pub use curve_command::CurveCommand;
pub use preview_command::PreviewCommand;
pub use animate_command::AnimateCommand;


use clap::ArgMatches;
use log::debug;

use crate::api::TravelAnimator;
use crate::coordinate::Point;
use crate::errors::{AnimError, AnimResult};
use crate::route::{Waypoint, WaypointRole};
use crate::utils::load_waypoint_file;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct TravelanimCommandFactory;

impl TravelanimCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TravelanimCommandFactory
    }
}

impl Default for TravelanimCommandFactory {
    fn default() -> Self {
        TravelanimCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for TravelanimCommandFactory {
    fn create_command(&self, args: &ArgMatches, animator: &'a TravelAnimator) -> AnimResult<Box<dyn Command + 'a>> {
        if args.get_flag("animate") {
            Ok(Box::new(AnimateCommand::new(args, animator)?))
        } else if args.contains_id("from") && args.get_one::<String>("input").is_none() {
            Ok(Box::new(CurveCommand::new(args, animator)?))
        } else {
            // Default to preview command
            Ok(Box::new(PreviewCommand::new(args, animator)?))
        }
    }
}

/// Parse a `--from`/`--to` style "lng,lat" argument
pub(crate) fn point_arg(args: &ArgMatches, id: &str) -> AnimResult<Option<Point>> {
    args.get_one::<String>(id)
        .map(|value| Point::from_string(value))
        .transpose()
}

/// `--samples` override of the configured samples per segment
pub(crate) fn sample_count_arg(args: &ArgMatches) -> AnimResult<Option<usize>> {
    args.get_one::<String>("samples")
        .map(|value| match value.parse::<usize>() {
            Ok(count) if count >= 2 => Ok(count),
            _ => Err(AnimError::InvalidInput(format!("Invalid sample count: {} (need at least 2)", value))),
        })
        .transpose()
}

/// Waypoints from the input file, or from `--from`/`--to` when no file is given
pub(crate) fn waypoints_from_args(args: &ArgMatches) -> AnimResult<Vec<Waypoint>> {
    if let Some(input) = args.get_one::<String>("input") {
        return load_waypoint_file(input);
    }

    match (point_arg(args, "from")?, point_arg(args, "to")?) {
        (Some(from), Some(to)) => {
            debug!("Using command line endpoints {} -> {}", from, to);
            Ok(vec![
                Waypoint::resolved(from, WaypointRole::Start),
                Waypoint::resolved(to, WaypointRole::End),
            ])
        }
        _ => Err(AnimError::InvalidInput(
            "Missing input: give a waypoint file or both --from and --to".to_string(),
        )),
    }
}
