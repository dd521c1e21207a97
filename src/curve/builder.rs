//! Curved path construction between two points
//!
//! A segment is drawn as a Bézier arc bowing to the left of the direction of
//! travel. The control point offset is the segment vector rotated by 90
//! degrees and scaled by the curvature factor, so its length is always
//! proportional to the segment length.

use log::debug;
use serde::Deserialize;

use super::bezier;
use crate::coordinate::Point;
use crate::errors::{AnimError, AnimResult};
use crate::route::Segment;

/// Default curvature factor applied to the perpendicular offset
pub const DEFAULT_CURVATURE_FACTOR: f64 = 0.2;

/// Default number of samples per segment
pub const DEFAULT_SAMPLE_COUNT: usize = 101;

/// Shape of the curve between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// One control point
    #[default]
    Quadratic,
    /// Two control points at one and two thirds of the segment
    Cubic,
}

/// How strongly a segment bows away from the straight line
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Curvature {
    /// Constant factor for every segment
    Fixed { factor: f64 },
    /// Factor grows with segment length: `min(base + gain * distance, max)`
    Proportional { base: f64, gain: f64, max: f64 },
}

impl Default for Curvature {
    fn default() -> Self {
        Curvature::Fixed { factor: DEFAULT_CURVATURE_FACTOR }
    }
}

impl Curvature {
    /// Curvature factor for a segment of the given length (degrees)
    pub fn factor_for(&self, distance: f64) -> f64 {
        match *self {
            Curvature::Fixed { factor } => factor,
            Curvature::Proportional { base, gain, max } => (base + gain * distance).min(max),
        }
    }
}

/// Builder for curved paths between two points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathCurveBuilder {
    /// Quadratic or cubic Bézier
    pub kind: CurveKind,
    /// Curvature factor policy
    pub curvature: Curvature,
}

impl PathCurveBuilder {
    /// Create a new curve builder
    pub fn new(kind: CurveKind, curvature: Curvature) -> Self {
        PathCurveBuilder { kind, curvature }
    }

    /// Straight-line builder (curvature factor 0)
    pub fn straight() -> Self {
        PathCurveBuilder::new(CurveKind::Quadratic, Curvature::Fixed { factor: 0.0 })
    }

    /// Control points for the curve between `origin` and `destination`
    ///
    /// # Returns
    /// One point for a quadratic curve, two for a cubic curve. Coincident
    /// endpoints yield control points equal to the endpoints.
    pub fn control_points(&self, origin: &Point, destination: &Point) -> Vec<Point> {
        let delta_lng = destination.lng - origin.lng;
        let delta_lat = destination.lat - origin.lat;
        let factor = self.curvature.factor_for(origin.distance_to(destination));

        // Left-hand perpendicular of the travel vector
        let offset_lng = -delta_lat * factor;
        let offset_lat = delta_lng * factor;

        match self.kind {
            CurveKind::Quadratic => {
                let mid = origin.midpoint(destination);
                vec![Point::new(mid.lng + offset_lng, mid.lat + offset_lat)]
            }
            CurveKind::Cubic => {
                let first = origin.lerp(destination, 1.0 / 3.0);
                let second = origin.lerp(destination, 2.0 / 3.0);
                vec![
                    Point::new(first.lng + offset_lng, first.lat + offset_lat),
                    Point::new(second.lng + offset_lng, second.lat + offset_lat),
                ]
            }
        }
    }

    /// Sample the curve between two points
    ///
    /// # Arguments
    /// * `origin` - First point of the curve
    /// * `destination` - Last point of the curve
    /// * `sample_count` - Number of samples, at least 2
    ///
    /// # Returns
    /// `sample_count` points; the first is `origin` and the last is `destination`
    pub fn build_curve(&self, origin: &Point, destination: &Point, sample_count: usize) -> AnimResult<Vec<Point>> {
        if sample_count < 2 {
            return Err(AnimError::InvalidInput(format!(
                "Curve needs at least 2 samples, got {}", sample_count
            )));
        }

        if origin == destination {
            debug!("Zero-length curve at {}", origin);
            return Ok(vec![*origin; sample_count]);
        }

        let controls = self.control_points(origin, destination);
        debug!("Building {:?} curve {} -> {} with {} samples (controls: {:?})",
               self.kind, origin, destination, sample_count, controls);

        let mut samples: Vec<Point> = bezier::parameters(sample_count)
            .map(|t| match self.kind {
                CurveKind::Quadratic => bezier::quadratic(origin, &controls[0], destination, t),
                CurveKind::Cubic => bezier::cubic(origin, &controls[0], &controls[1], destination, t),
            })
            .collect();

        // Pin the endpoints exactly
        samples[0] = *origin;
        samples[sample_count - 1] = *destination;

        Ok(samples)
    }

    /// Build a full segment between two points
    pub fn build_segment(&self, origin: &Point, destination: &Point, sample_count: usize) -> AnimResult<Segment> {
        let samples = self.build_curve(origin, destination, sample_count)?;
        Ok(Segment::new(*origin, *destination, samples))
    }
}
