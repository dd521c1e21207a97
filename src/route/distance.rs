//! Ground distance and display units

use std::str::FromStr;

use serde::Deserialize;

use crate::coordinate::Point;
use crate::errors::{AnimError, AnimResult};

/// Mean Earth radius in meters used for haversine distances
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Unit used to display route distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(alias = "km", alias = "Km", alias = "kilometers")]
    Kilometers,
    #[serde(alias = "m", alias = "M", alias = "meters")]
    Meters,
    /// Distance label hidden
    #[serde(alias = "off", alias = "Off")]
    Off,
}

impl FromStr for DistanceUnit {
    type Err = AnimError;

    fn from_str(s: &str) -> AnimResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "m" | "meters" => Ok(DistanceUnit::Meters),
            "off" | "none" => Ok(DistanceUnit::Off),
            other => Err(AnimError::ConfigError(format!("Unknown distance unit: {}", other))),
        }
    }
}

/// Great-circle distance between two points in meters
pub fn haversine_meters(a: &Point, b: &Point) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * MEAN_EARTH_RADIUS * h.sqrt().asin()
}

/// Format a distance for display
///
/// # Returns
/// `None` when the unit is `Off`
pub fn format_distance(meters: f64, unit: DistanceUnit) -> Option<String> {
    match unit {
        DistanceUnit::Kilometers => Some(format!("{:.1} km", meters / 1000.0)),
        DistanceUnit::Meters => Some(format!("{:.0} m", meters)),
        DistanceUnit::Off => None,
    }
}
