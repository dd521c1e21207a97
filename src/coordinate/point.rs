//! Point structure for representing geographic coordinates

use std::fmt;

use crate::errors::{AnimError, AnimResult};

/// A geographic point (longitude, latitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Longitude in degrees, [-180, 180]
    pub lng: f64,
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
}

impl Point {
    /// Create a new point without range validation
    pub fn new(lng: f64, lat: f64) -> Self {
        Point { lng, lat }
    }

    /// Create a new point, rejecting coordinates outside the valid range
    ///
    /// # Arguments
    /// * `lng` - Longitude in degrees
    /// * `lat` - Latitude in degrees
    ///
    /// # Returns
    /// The point, or `CoordinateOutOfRange` if either value is out of range or not finite
    pub fn checked(lng: f64, lat: f64) -> AnimResult<Self> {
        let point = Point { lng, lat };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(AnimError::CoordinateOutOfRange { lng, lat })
        }
    }

    /// Parse a point from a string (format: "lng,lat")
    pub fn from_string(coord_str: &str) -> AnimResult<Self> {
        let parts: Vec<&str> = coord_str.split(',').collect();
        if parts.len() != 2 {
            return Err(AnimError::InvalidInput(
                "Coordinate must be in format 'lng,lat'".to_string(),
            ));
        }

        let lng = parts[0].trim().parse::<f64>()
            .map_err(|_| AnimError::InvalidInput(format!("Invalid longitude: {}", parts[0].trim())))?;
        let lat = parts[1].trim().parse::<f64>()
            .map_err(|_| AnimError::InvalidInput(format!("Invalid latitude: {}", parts[1].trim())))?;

        Self::checked(lng, lat)
    }

    /// Check that both coordinates are finite and within range
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// Euclidean distance in degree space
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.lng - self.lng;
        let dy = other.lat - self.lat;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`, `t` in [0, 1]
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.lng + (other.lng - self.lng) * t,
            self.lat + (other.lat - self.lat) * t,
        )
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point) -> Point {
        self.lerp(other, 0.5)
    }

    /// Compare two points with an absolute tolerance on each axis
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.lng - other.lng).abs() <= tolerance && (self.lat - other.lat).abs() <= tolerance
    }

    /// Coordinates as a `[lng, lat]` pair
    pub fn to_array(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lng, self.lat)
    }
}
