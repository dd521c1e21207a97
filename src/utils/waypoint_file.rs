//! Waypoint file loading
//!
//! A waypoint file is TOML with `[[waypoints]]` entries in traversal order and
//! an optional `[[places]]` table acting as the gazetteer for `query` entries:
//!
//! ```toml
//! [[places]]
//! label = "Aluva, Kerala, India"
//! coordinates = [76.3516, 10.1004]
//!
//! [[waypoints]]
//! label = "Edappally"
//! coordinates = { lng = 76.3083, lat = 10.0261 }
//!
//! [[waypoints]]
//! query = "aluva"
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::coordinate::RawCoordinates;
use crate::errors::{AnimError, AnimResult};
use crate::geocode::{resolve_waypoint, Candidate, Gazetteer, Geocoder};
use crate::route::{Waypoint, WaypointRole};

/// One `[[places]]` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceEntry {
    pub label: String,
    pub coordinates: RawCoordinates,
}

/// One `[[waypoints]]` entry
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WaypointEntry {
    pub label: Option<String>,
    /// Explicit role; positional when omitted
    pub role: Option<WaypointRole>,
    pub coordinates: Option<RawCoordinates>,
    /// Free text resolved through the places table
    pub query: Option<String>,
}

/// Parsed waypoint file
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WaypointFile {
    pub places: Vec<PlaceEntry>,
    pub waypoints: Vec<WaypointEntry>,
    /// Reverse-lookup radius in degrees for labelling coordinate entries
    pub reverse_tolerance: Option<f64>,
}

impl WaypointFile {
    pub fn from_str(content: &str) -> AnimResult<Self> {
        toml::from_str(content)
            .map_err(|e| AnimError::ConfigError(format!("Failed to parse waypoint file: {}", e)))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> AnimResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Gazetteer built from the `[[places]]` table
    pub fn gazetteer(&self) -> AnimResult<Gazetteer> {
        let places = self.places.iter()
            .map(|place| Ok(Candidate::new(place.label.clone(), place.coordinates.normalize()?)))
            .collect::<AnimResult<Vec<Candidate>>>()?;

        let gazetteer = Gazetteer::from_places(places);
        Ok(match self.reverse_tolerance {
            Some(tolerance) => gazetteer.with_reverse_tolerance(tolerance),
            None => gazetteer,
        })
    }

    /// Resolve every entry into a waypoint
    ///
    /// Out-of-range coordinates are an error. Queries that match no place
    /// produce unresolved waypoints, which the route builder rejects later.
    pub fn resolve(&self) -> AnimResult<Vec<Waypoint>> {
        let gazetteer = self.gazetteer()?;
        let len = self.waypoints.len();

        let mut waypoints = Vec::with_capacity(self.waypoints.len());
        for (index, entry) in self.waypoints.iter().enumerate() {
            let role = entry.role.unwrap_or_else(|| WaypointRole::for_position(index, len));

            let mut waypoint = match (&entry.coordinates, &entry.query) {
                (Some(raw), _) => {
                    let point = raw.normalize()?;
                    let label = match &entry.label {
                        Some(label) => Some(label.clone()),
                        None => gazetteer.reverse(&point).unwrap_or(None),
                    };
                    Waypoint { point: Some(point), role, label }
                }
                (None, Some(query)) => resolve_waypoint(&gazetteer, query, role),
                (None, None) => {
                    warn!("Waypoint {} has neither coordinates nor a query", index);
                    Waypoint::unresolved(role, entry.label.clone())
                }
            };

            if entry.coordinates.is_none() && entry.label.is_some() {
                waypoint.label = entry.label.clone();
            }
            debug!("Waypoint {}: {:?}", index, waypoint);
            waypoints.push(waypoint);
        }

        info!("Loaded {} waypoints ({} places known)", waypoints.len(), gazetteer.len());
        Ok(waypoints)
    }
}

/// Read and resolve a waypoint file
pub fn load_waypoint_file<P: AsRef<Path>>(path: P) -> AnimResult<Vec<Waypoint>> {
    info!("Loading waypoints from {}", path.as_ref().display());
    WaypointFile::from_file(path)?.resolve()
}
