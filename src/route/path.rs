//! Concatenated multi-segment route
//!
//! A route is the ordered concatenation of the curve samples of every
//! consecutive waypoint pair. Animation progress maps onto it by sample index.

use log::{debug, info};

use super::distance::haversine_meters;
use super::segment::{polyline_length, Segment};
use super::waypoint::Waypoint;
use crate::coordinate::{BoundingBox, Point};
use crate::curve::PathCurveBuilder;
use crate::errors::{AnimError, AnimResult};

/// Sample index for a progress fraction on a route of `len` samples
///
/// `floor(progress * (len - 1))` clamped to `[0, len - 1]`. Progress outside
/// [0, 1] (or NaN) is clamped first, so the mapping is total.
pub fn progress_index(progress: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let last = len - 1;
    ((progress * last as f64).floor() as usize).min(last)
}

/// Ordered sequence of samples covering every segment
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    samples: Vec<Point>,
    segments: Vec<Segment>,
}

impl Route {
    /// Build a route through the waypoints in order
    ///
    /// # Arguments
    /// * `waypoints` - At least two waypoints, all resolved
    /// * `builder` - Curve builder used for every segment
    /// * `sample_count` - Samples per segment, at least 2
    /// * `dedupe_joints` - Drop the first sample of each segment after the first,
    ///   since it repeats the previous segment's last sample
    ///
    /// # Returns
    /// The route, or `InvalidInput`/`MissingCoordinates` when the waypoints can't form one
    pub fn from_waypoints(
        waypoints: &[Waypoint],
        builder: &PathCurveBuilder,
        sample_count: usize,
        dedupe_joints: bool,
    ) -> AnimResult<Self> {
        if waypoints.len() < 2 {
            return Err(AnimError::InvalidInput(format!(
                "A route needs at least 2 waypoints, got {}", waypoints.len()
            )));
        }

        let points = waypoints.iter()
            .enumerate()
            .map(|(index, waypoint)| {
                waypoint.point.ok_or_else(|| AnimError::MissingCoordinates {
                    index,
                    label: waypoint.label.clone(),
                })
            })
            .collect::<AnimResult<Vec<Point>>>()?;

        let segments = points.windows(2)
            .map(|pair| builder.build_segment(&pair[0], &pair[1], sample_count))
            .collect::<AnimResult<Vec<Segment>>>()?;

        let route = Self::from_segments(segments, dedupe_joints);
        info!("Built route through {} waypoints: {} segments, {} samples",
              waypoints.len(), route.segments.len(), route.samples.len());
        Ok(route)
    }

    /// Concatenate already built segments
    pub fn from_segments(segments: Vec<Segment>, dedupe_joints: bool) -> Self {
        let mut samples: Vec<Point> = Vec::with_capacity(segments.iter().map(|s| s.samples().len()).sum());

        for (i, segment) in segments.iter().enumerate() {
            let skip = if dedupe_joints && i > 0 { 1 } else { 0 };
            samples.extend(segment.samples().iter().skip(skip));
        }

        debug!("Concatenated {} segments into {} samples (dedupe: {})",
               segments.len(), samples.len(), dedupe_joints);
        Route { samples, segments }
    }

    /// Wrap a pre-built sample sequence as a single-segment route
    pub fn from_samples(samples: Vec<Point>) -> Self {
        let segments = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => vec![Segment::new(*first, *last, samples.clone())],
            _ => Vec::new(),
        };
        Route { samples, segments }
    }

    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.samples.last().copied()
    }

    /// Sum of sample-to-sample Euclidean distances (degrees)
    pub fn total_length(&self) -> f64 {
        polyline_length(&self.samples)
    }

    /// Along-the-curve ground distance in meters
    pub fn ground_distance_meters(&self) -> f64 {
        self.samples.windows(2).map(|pair| haversine_meters(&pair[0], &pair[1])).sum()
    }

    /// Bounding box of every sample, `None` for an empty route
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.samples)
    }

    /// Sample index for a progress fraction
    pub fn index_at(&self, progress: f64) -> usize {
        progress_index(progress, self.samples.len())
    }

    /// Sample at a progress fraction, `None` for an empty route
    pub fn point_at(&self, progress: f64) -> Option<Point> {
        self.samples.get(self.index_at(progress)).copied()
    }

    /// Samples from the start up to and including the sample at `progress`
    pub fn path_to(&self, progress: f64) -> &[Point] {
        if self.samples.is_empty() {
            return &[];
        }
        &self.samples[..=self.index_at(progress)]
    }
}
