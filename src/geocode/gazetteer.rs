//! In-memory place lookup

use super::{Candidate, Geocoder};
use crate::coordinate::Point;
use crate::errors::{AnimError, AnimResult};

/// Default reverse-lookup radius in degrees
const DEFAULT_REVERSE_TOLERANCE: f64 = 0.01;

/// Named places matched by case-insensitive text search
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<Candidate>,
    reverse_tolerance: f64,
}

impl Gazetteer {
    pub fn new() -> Self {
        Gazetteer { places: Vec::new(), reverse_tolerance: DEFAULT_REVERSE_TOLERANCE }
    }

    /// Gazetteer over the given places
    pub fn from_places(places: Vec<Candidate>) -> Self {
        Gazetteer { places, reverse_tolerance: DEFAULT_REVERSE_TOLERANCE }
    }

    /// Set the reverse-lookup radius in degrees
    pub fn with_reverse_tolerance(mut self, degrees: f64) -> Self {
        self.reverse_tolerance = degrees;
        self
    }

    pub fn add(&mut self, label: impl Into<String>, point: Point) {
        self.places.push(Candidate::new(label, point));
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Gazetteer::new()
    }
}

/// Lower is better: exact, prefix, substring
fn match_rank(label: &str, query: &str) -> Option<u8> {
    let label = label.to_lowercase();
    if label == query {
        Some(0)
    } else if label.starts_with(query) {
        Some(1)
    } else if label.contains(query) {
        Some(2)
    } else {
        None
    }
}

impl Geocoder for Gazetteer {
    fn resolve(&self, query: &str) -> AnimResult<Vec<Candidate>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(AnimError::ResolutionFailure("Empty location query".to_string()));
        }

        let mut ranked: Vec<(u8, &Candidate)> = self.places.iter()
            .filter_map(|place| match_rank(&place.label, &query).map(|rank| (rank, place)))
            .collect();
        // Stable: equal ranks keep insertion order
        ranked.sort_by_key(|(rank, _)| *rank);

        Ok(ranked.into_iter().map(|(_, place)| place.clone()).collect())
    }

    fn reverse(&self, point: &Point) -> AnimResult<Option<String>> {
        let nearest = self.places.iter()
            .map(|place| (place.point.distance_to(point), place))
            .filter(|(distance, _)| *distance <= self.reverse_tolerance)
            .min_by(|a, b| a.0.total_cmp(&b.0));

        Ok(nearest.map(|(_, place)| place.label.clone()))
    }
}
