//! Coordinate transformation functionality

use std::f64::consts::PI;

use super::bbox::BoundingBox;
use super::point::Point;

/// Transformer between WGS84 degrees and Web Mercator meters
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Earth radius in meters
    pub const EARTH_RADIUS: f64 = 6378137.0;

    /// Web Mercator latitude limit
    pub const MAX_MERCATOR_LAT: f64 = 85.05112878;

    /// Convert from WGS84 (EPSG:4326) to Web Mercator (EPSG:3857)
    ///
    /// The returned point carries meters in its `lng`/`lat` fields.
    pub fn wgs84_to_web_mercator(lng: f64, lat: f64) -> Point {
        let lat = lat.clamp(-Self::MAX_MERCATOR_LAT, Self::MAX_MERCATOR_LAT);

        let x = lng * Self::EARTH_RADIUS * PI / 180.0;
        let y = f64::ln(f64::tan((90.0 + lat) * PI / 360.0)) * Self::EARTH_RADIUS;

        Point::new(x, y)
    }

    /// Convert from Web Mercator (EPSG:3857) to WGS84 (EPSG:4326)
    pub fn web_mercator_to_wgs84(x: f64, y: f64) -> Point {
        let lng = x * 180.0 / (Self::EARTH_RADIUS * PI);
        let lat = 180.0 / PI * (2.0 * f64::atan(f64::exp(y / Self::EARTH_RADIUS)) - PI / 2.0);

        Point::new(lng, lat)
    }

    /// Extent of a bounding box in Web Mercator meters as (width, height)
    pub fn mercator_extent(bbox: &BoundingBox) -> (f64, f64) {
        let min = Self::wgs84_to_web_mercator(bbox.min_lng, bbox.min_lat);
        let max = Self::wgs84_to_web_mercator(bbox.max_lng, bbox.max_lat);

        ((max.lng - min.lng).abs(), (max.lat - min.lat).abs())
    }

    /// Compass bearing in degrees [0, 360) from `from` towards `to`
    ///
    /// Computed on the sphere; 0 is north, 90 is east. Coincident points give 0.
    pub fn bearing(from: &Point, to: &Point) -> f64 {
        if from == to {
            return 0.0;
        }
        let lat1 = from.lat.to_radians();
        let lat2 = to.lat.to_radians();
        let dlng = (to.lng - from.lng).to_radians();

        let y = dlng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}
