//! Location resolution boundary
//!
//! Free text is turned into coordinates by an external geocoding service.
//! This module defines that capability as a trait, ships an in-memory
//! [`Gazetteer`] implementation, and converts resolution failures into
//! unresolved waypoints so that a later `start` is rejected instead of
//! animating towards unknown coordinates.

mod gazetteer;


use log::{debug, warn};

use crate::coordinate::Point;
use crate::errors::AnimResult;
use crate::route::{Waypoint, WaypointRole};

pub use self::gazetteer::Gazetteer;

/// Label used when reverse lookup finds nothing
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Label used when reverse lookup fails
pub const LOOKUP_FAILED: &str = "Error fetching address";

/// One geocoding result
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub label: String,
    pub point: Point,
}

impl Candidate {
    pub fn new(label: impl Into<String>, point: Point) -> Self {
        Candidate { label: label.into(), point }
    }
}

/// "Resolve text to coordinates" capability
pub trait Geocoder {
    /// Candidates for a free-text query, best first; may be empty
    fn resolve(&self, query: &str) -> AnimResult<Vec<Candidate>>;

    /// Place name for a point, if known
    fn reverse(&self, _point: &Point) -> AnimResult<Option<String>> {
        Ok(None)
    }
}

/// Resolve a query into a waypoint
///
/// The first candidate wins. A failed lookup or an empty result yields an
/// unresolved waypoint labelled with the query.
pub fn resolve_waypoint<G: Geocoder + ?Sized>(geocoder: &G, query: &str, role: WaypointRole) -> Waypoint {
    match geocoder.resolve(query) {
        Ok(candidates) => match candidates.into_iter().next() {
            Some(candidate) => {
                debug!("Resolved '{}' to {} ({})", query, candidate.point, candidate.label);
                Waypoint {
                    point: Some(candidate.point),
                    role,
                    label: Some(candidate.label),
                }
            }
            None => {
                warn!("No location found for '{}'", query);
                Waypoint::unresolved(role, Some(query.to_string()))
            }
        },
        Err(e) => {
            warn!("Resolving '{}' failed: {}", query, e);
            Waypoint::unresolved(role, Some(query.to_string()))
        }
    }
}

/// Display label for a point, falling back to fixed labels on miss or failure
pub fn label_for<G: Geocoder + ?Sized>(geocoder: &G, point: &Point) -> String {
    match geocoder.reverse(point) {
        Ok(Some(label)) => label,
        Ok(None) => UNKNOWN_LOCATION.to_string(),
        Err(e) => {
            warn!("Reverse lookup for {} failed: {}", point, e);
            LOOKUP_FAILED.to_string()
        }
    }
}
