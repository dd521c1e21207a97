//! Start / stops / end trip model
//!
//! Mirrors how a trip is edited: a start location, any number of
//! intermediate stops, and an end location. Markers can be dragged, which
//! moves the waypoint at that position in traversal order.

use log::debug;

use super::waypoint::{Waypoint, WaypointRole};
use crate::coordinate::Point;
use crate::errors::{AnimError, AnimResult};

/// Editable trip description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    pub start: Option<Waypoint>,
    pub stops: Vec<Waypoint>,
    pub end: Option<Waypoint>,
}

impl Itinerary {
    pub fn new() -> Self {
        Itinerary::default()
    }

    pub fn set_start(&mut self, point: Option<Point>, label: Option<String>) -> &mut Self {
        self.start = Some(Waypoint { point, role: WaypointRole::Start, label });
        self
    }

    pub fn set_end(&mut self, point: Option<Point>, label: Option<String>) -> &mut Self {
        self.end = Some(Waypoint { point, role: WaypointRole::End, label });
        self
    }

    /// Append an intermediate stop
    pub fn push_stop(&mut self, point: Option<Point>, label: Option<String>) -> &mut Self {
        self.stops.push(Waypoint { point, role: WaypointRole::Intermediate, label });
        self
    }

    /// Remove the intermediate stop at `index` (index among stops only)
    pub fn remove_stop(&mut self, index: usize) -> AnimResult<Waypoint> {
        if index >= self.stops.len() {
            return Err(AnimError::InvalidInput(format!(
                "No stop #{} (itinerary has {} stops)", index, self.stops.len()
            )));
        }
        Ok(self.stops.remove(index))
    }

    /// Number of waypoints in traversal order
    pub fn len(&self) -> usize {
        self.start.is_some() as usize + self.stops.len() + self.end.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Waypoints in traversal order: start, stops, end
    pub fn to_waypoints(&self) -> Vec<Waypoint> {
        self.start.iter()
            .chain(self.stops.iter())
            .chain(self.end.iter())
            .cloned()
            .collect()
    }

    /// Move the waypoint at `index` (traversal order) to a new location
    ///
    /// # Arguments
    /// * `index` - Position in traversal order, as returned by `to_waypoints`
    /// * `point` - New location
    /// * `label` - New label; `None` keeps the current one
    pub fn move_waypoint(&mut self, index: usize, point: Point, label: Option<String>) -> AnimResult<()> {
        let total = self.len();
        let waypoint = self.waypoint_mut(index).ok_or_else(|| {
            AnimError::InvalidInput(format!("No waypoint #{} (itinerary has {})", index, total))
        })?;

        debug!("Moving {} waypoint #{} to {}", waypoint.role, index, point);
        waypoint.point = Some(point);
        if label.is_some() {
            waypoint.label = label;
        }
        Ok(())
    }

    fn waypoint_mut(&mut self, index: usize) -> Option<&mut Waypoint> {
        self.start.iter_mut()
            .chain(self.stops.iter_mut())
            .chain(self.end.iter_mut())
            .nth(index)
    }
}
