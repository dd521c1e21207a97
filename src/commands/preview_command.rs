//! Route preview command
//!
//! Builds the route through the given waypoints, prints a summary and
//! optionally writes the route as GeoJSON.

use std::fs::File;
use std::io::{BufWriter, Write};

use clap::ArgMatches;
use log::{info, warn};

use crate::api::TravelAnimator;
use crate::commands::command_traits::Command;
use crate::commands::{sample_count_arg, waypoints_from_args};
use crate::errors::{AnimError, AnimResult};
use crate::route::Waypoint;

/// Command for previewing a route without animating it
pub struct PreviewCommand<'a> {
    waypoints: Vec<Waypoint>,
    /// Samples per segment
    sample_count: usize,
    /// GeoJSON output path
    geojson_path: Option<String>,
    animator: &'a TravelAnimator,
}

impl<'a> PreviewCommand<'a> {
    /// Create a new preview command
    ///
    /// Waypoints are loaded (and queries resolved) here; unresolved waypoints
    /// are reported when the route is built.
    pub fn new(args: &ArgMatches, animator: &'a TravelAnimator) -> AnimResult<Self> {
        let waypoints = waypoints_from_args(args)?;
        let sample_count = sample_count_arg(args)?.unwrap_or(animator.settings().curve.sample_count);
        let geojson_path = args.get_one::<String>("geojson").cloned();

        Ok(PreviewCommand { waypoints, sample_count, geojson_path, animator })
    }

    fn write_geojson(&self, path: &str, value: &serde_json::Value) -> AnimResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, value)
            .map_err(|e| AnimError::GenericError(format!("Failed to write GeoJSON: {}", e)))?;
        writer.flush()?;
        info!("GeoJSON written to {}", path);
        Ok(())
    }
}

impl<'a> Command for PreviewCommand<'a> {
    fn execute(&self) -> AnimResult<()> {
        for (index, waypoint) in self.waypoints.iter().enumerate() {
            match waypoint.point {
                Some(point) => info!("  [{}] {} {} {}", index, waypoint.role, point,
                                     waypoint.label.as_deref().unwrap_or("")),
                None => warn!("  [{}] {} unresolved {}", index, waypoint.role,
                              waypoint.label.as_deref().unwrap_or("")),
            }
        }

        let route = self.animator.build_route_with(&self.waypoints, self.sample_count)?;
        let summary = self.animator.summarize(&route)?;
        println!("{}", summary);

        if let Some(path) = &self.geojson_path {
            let geojson = self.animator.route_geojson(&route, &self.waypoints);
            self.write_geojson(path, &geojson)?;
        }
        Ok(())
    }
}
