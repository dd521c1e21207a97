//! Sampled segment between two consecutive waypoints

use crate::coordinate::Point;

/// Curve samples between an origin and a destination
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    origin: Point,
    destination: Point,
    samples: Vec<Point>,
}

impl Segment {
    /// Create a segment from already computed samples
    ///
    /// Callers are expected to pass samples starting at `origin` and ending at
    /// `destination`; `PathCurveBuilder::build_segment` guarantees this.
    pub fn new(origin: Point, destination: Point, samples: Vec<Point>) -> Self {
        Segment { origin, destination, samples }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Whether origin and destination coincide
    pub fn is_degenerate(&self) -> bool {
        self.origin == self.destination
    }

    /// Sum of sample-to-sample distances in degree space
    pub fn length(&self) -> f64 {
        polyline_length(&self.samples)
    }
}

/// Sum of consecutive Euclidean distances along a polyline
pub(crate) fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance_to(&pair[1])).sum()
}
