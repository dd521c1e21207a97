//! Normalization of loosely shaped coordinate inputs
//!
//! Location data arrives from search results, map markers and config files in
//! several shapes. Everything is turned into a validated [`Point`] here, at the
//! boundary, so the rest of the crate only ever handles one representation.

use serde::Deserialize;

use super::point::Point;
use crate::errors::{AnimError, AnimResult};

/// Accepted raw coordinate shapes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinates {
    /// `[lng, lat]`
    Pair([f64; 2]),
    /// `{ lng, lat }`
    LngLat { lng: f64, lat: f64 },
    /// `{ longitude, latitude }`
    LongLat { longitude: f64, latitude: f64 },
    /// `{ coordinates: [lng, lat] }` as found in GeoJSON geometries
    Geometry { coordinates: [f64; 2] },
}

impl RawCoordinates {
    /// Convert to a range-checked point
    pub fn normalize(&self) -> AnimResult<Point> {
        let (lng, lat) = match *self {
            RawCoordinates::Pair([lng, lat]) => (lng, lat),
            RawCoordinates::LngLat { lng, lat } => (lng, lat),
            RawCoordinates::LongLat { longitude, latitude } => (longitude, latitude),
            RawCoordinates::Geometry { coordinates: [lng, lat] } => (lng, lat),
        };
        Point::checked(lng, lat)
    }
}

impl From<Point> for RawCoordinates {
    fn from(point: Point) -> Self {
        RawCoordinates::Pair(point.to_array())
    }
}

/// Parse and normalize a JSON coordinate value of any accepted shape
pub fn normalize_json(value: &serde_json::Value) -> AnimResult<Point> {
    let raw: RawCoordinates = serde_json::from_value(value.clone())
        .map_err(|e| AnimError::InvalidInput(format!("Unrecognized coordinate shape {}: {}", value, e)))?;
    raw.normalize()
}
