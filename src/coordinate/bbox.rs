//! Bounding box structure for fitting a route into view

use super::point::Point;

/// A longitude/latitude bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum longitude
    pub min_lng: f64,
    /// Minimum latitude
    pub min_lat: f64,
    /// Maximum longitude
    pub max_lng: f64,
    /// Maximum latitude
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        BoundingBox {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Degenerate bounding box around a single point
    pub fn from_point(point: &Point) -> Self {
        BoundingBox::new(point.lng, point.lat, point.lng, point.lat)
    }

    /// Smallest bounding box containing every point
    ///
    /// # Returns
    /// `None` when `points` is empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let mut bbox = BoundingBox::from_point(iter.next()?);
        for point in iter {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Grow the box so that it contains `point`
    pub fn extend(&mut self, point: &Point) {
        self.min_lng = self.min_lng.min(point.lng);
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lng = self.max_lng.max(point.lng);
        self.max_lat = self.max_lat.max(point.lat);
    }

    /// Get the width of the bounding box in degrees
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Get the height of the bounding box in degrees
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min_lng + self.width() / 2.0,
            self.min_lat + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        point.lng >= self.min_lng && point.lng <= self.max_lng &&
            point.lat >= self.min_lat && point.lat <= self.max_lat
    }

    /// Grow the box by `degrees` on every side, clamped to the valid coordinate range
    pub fn with_padding_degrees(&self, degrees: f64) -> Self {
        BoundingBox::new(
            (self.min_lng - degrees).max(-180.0),
            (self.min_lat - degrees).max(-90.0),
            (self.max_lng + degrees).min(180.0),
            (self.max_lat + degrees).min(90.0),
        )
    }

    /// Corners as `[[min_lng, min_lat], [max_lng, max_lat]]`
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [[self.min_lng, self.min_lat], [self.max_lng, self.max_lat]]
    }
}
