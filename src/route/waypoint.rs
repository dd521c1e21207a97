//! Waypoint definitions

use std::fmt;

use serde::Deserialize;

use crate::coordinate::Point;

/// Role of a waypoint in the traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointRole {
    /// First point of the route
    Start,
    /// Any stop between start and end
    #[serde(alias = "waypoint", alias = "stop")]
    Intermediate,
    /// Last point of the route
    End,
}

impl WaypointRole {
    /// Positional role of the waypoint at `index` in a list of `len` waypoints
    pub fn for_position(index: usize, len: usize) -> Self {
        if index == 0 {
            WaypointRole::Start
        } else if index + 1 >= len {
            WaypointRole::End
        } else {
            WaypointRole::Intermediate
        }
    }
}

impl fmt::Display for WaypointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaypointRole::Start => "start",
            WaypointRole::Intermediate => "intermediate",
            WaypointRole::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// A location on the route, possibly not resolved to coordinates yet
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Resolved coordinates, `None` when resolution failed
    pub point: Option<Point>,
    /// Role in the traversal order
    pub role: WaypointRole,
    /// Display label (usually the place name)
    pub label: Option<String>,
}

impl Waypoint {
    /// Waypoint with known coordinates
    pub fn resolved(point: Point, role: WaypointRole) -> Self {
        Waypoint { point: Some(point), role, label: None }
    }

    /// Waypoint whose location could not be resolved
    pub fn unresolved(role: WaypointRole, label: Option<String>) -> Self {
        Waypoint { point: None, role, label }
    }

    /// Attach a display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.point.is_some()
    }

    /// Assign roles from the position in the list: first start, last end, rest intermediate
    pub fn assign_roles(waypoints: &mut [Waypoint]) {
        let len = waypoints.len();
        for (i, waypoint) in waypoints.iter_mut().enumerate() {
            waypoint.role = WaypointRole::for_position(i, len);
        }
    }
}
