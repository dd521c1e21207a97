//! Curve sampling command
//!
//! Prints the sampled curve between two points, one `lng,lat` pair per line.

use clap::ArgMatches;
use log::info;

use crate::api::TravelAnimator;
use crate::commands::command_traits::Command;
use crate::commands::{point_arg, sample_count_arg};
use crate::coordinate::Point;
use crate::errors::{AnimError, AnimResult};

/// Command for sampling a single curve
pub struct CurveCommand<'a> {
    origin: Point,
    destination: Point,
    /// Overrides the configured sample count
    sample_count: Option<usize>,
    animator: &'a TravelAnimator,
}

impl<'a> CurveCommand<'a> {
    /// Create a new curve command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `animator` - Configured library facade
    ///
    /// # Returns
    /// A new CurveCommand instance or an error
    pub fn new(args: &ArgMatches, animator: &'a TravelAnimator) -> AnimResult<Self> {
        let origin = point_arg(args, "from")?
            .ok_or_else(|| AnimError::InvalidInput("Missing --from coordinate".to_string()))?;
        let destination = point_arg(args, "to")?
            .ok_or_else(|| AnimError::InvalidInput("Missing --to coordinate".to_string()))?;

        let sample_count = sample_count_arg(args)?;

        Ok(CurveCommand { origin, destination, sample_count, animator })
    }
}

impl<'a> Command for CurveCommand<'a> {
    fn execute(&self) -> AnimResult<()> {
        let count = self.sample_count.unwrap_or(self.animator.settings().curve.sample_count);
        info!("Sampling curve {} -> {} with {} samples", self.origin, self.destination, count);

        let builder = self.animator.curve_builder();
        for control in builder.control_points(&self.origin, &self.destination) {
            info!("  Control point: {}", control);
        }

        let samples = builder.build_curve(&self.origin, &self.destination, count)?;
        for point in &samples {
            println!("{:.8},{:.8}", point.lng, point.lat);
        }
        Ok(())
    }
}
