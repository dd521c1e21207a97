//! Waypoints, segments and concatenated routes

mod distance;
mod itinerary;
mod path;
mod segment;
mod waypoint;

#[cfg(test)]
mod tests;

pub use self::distance::{format_distance, haversine_meters, DistanceUnit, MEAN_EARTH_RADIUS};
pub use self::itinerary::Itinerary;
pub use self::path::{progress_index, Route};
pub use self::segment::Segment;
pub use self::waypoint::{Waypoint, WaypointRole};
