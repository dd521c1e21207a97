//! Tests for the start/stops/end trip model

extern crate std;

use crate::coordinate::Point;
use crate::route::{Itinerary, Waypoint, WaypointRole};

fn sample_itinerary() -> Itinerary {
    let mut itinerary = Itinerary::new();
    itinerary
        .set_start(Some(Point::new(76.3083, 10.0261)), Some("Edappally".to_string()))
        .push_stop(Some(Point::new(76.3210, 10.0500)), Some("Kalamassery".to_string()))
        .set_end(Some(Point::new(76.3516, 10.1004)), Some("Aluva".to_string()));
    itinerary
}

#[test]
fn test_traversal_order() {
    let waypoints = sample_itinerary().to_waypoints();

    std::assert_eq!(waypoints.len(), 3);
    let roles: Vec<WaypointRole> = waypoints.iter().map(|w| w.role).collect();
    std::assert_eq!(roles, vec![WaypointRole::Start, WaypointRole::Intermediate, WaypointRole::End]);
    std::assert_eq!(waypoints[2].label.as_deref(), Some("Aluva"));
}

#[test]
fn test_move_waypoint_keeps_label() {
    let mut itinerary = sample_itinerary();

    itinerary.move_waypoint(1, Point::new(76.33, 10.06), None).unwrap();
    let stop = &itinerary.stops[0];
    std::assert_eq!(stop.point, Some(Point::new(76.33, 10.06)));
    std::assert_eq!(stop.label.as_deref(), Some("Kalamassery"));

    itinerary.move_waypoint(2, Point::new(76.36, 10.11), Some("Aluva East".to_string())).unwrap();
    std::assert_eq!(itinerary.end.as_ref().and_then(|w| w.label.as_deref()), Some("Aluva East"));

    std::assert!(itinerary.move_waypoint(3, Point::new(0.0, 0.0), None).is_err());
}

#[test]
fn test_remove_stop() {
    let mut itinerary = sample_itinerary();

    let removed = itinerary.remove_stop(0).unwrap();
    std::assert_eq!(removed.label.as_deref(), Some("Kalamassery"));
    std::assert_eq!(itinerary.len(), 2);
    std::assert!(itinerary.remove_stop(0).is_err());
}

#[test]
fn test_assign_roles() {
    let mut list = vec![
        Waypoint::resolved(Point::new(0.0, 0.0), WaypointRole::End),
        Waypoint::resolved(Point::new(1.0, 0.0), WaypointRole::End),
        Waypoint::resolved(Point::new(2.0, 0.0), WaypointRole::Start),
    ];
    Waypoint::assign_roles(&mut list);

    std::assert_eq!(list[0].role, WaypointRole::Start);
    std::assert_eq!(list[1].role, WaypointRole::Intermediate);
    std::assert_eq!(list[2].role, WaypointRole::End);
}
