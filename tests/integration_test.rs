//! Integration tests for route building and animation

extern crate std;

use travelanim::animation::{AnimationPhase, FixedStepDriver, ManualScheduler, RecordingRenderer};
use travelanim::{AnimError, Point, Settings, Timing, TravelAnimator, Waypoint, WaypointRole};

const SETTINGS: &str = r#"
[curve]
sample_count = 11

[animation]
duration_ms = 1000.0
frame_step_ms = 100.0

[export]
units = "km"
"#;

fn kerala_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::resolved(Point::new(76.3083, 10.0261), WaypointRole::Start).with_label("Edappally"),
        Waypoint::resolved(Point::new(76.3200, 10.0500), WaypointRole::Intermediate).with_label("Kalamassery"),
        Waypoint::resolved(Point::new(76.3516, 10.1004), WaypointRole::End).with_label("Aluva"),
    ]
}

fn travel_animator() -> TravelAnimator {
    TravelAnimator::new(Settings::from_str(SETTINGS).unwrap()).unwrap()
}

#[test]
fn test_build_and_summarize_route() {
    let animator = travel_animator();
    let waypoints = kerala_waypoints();
    let route = animator.build_route(&waypoints).unwrap();

    // Two segments of 11 samples sharing one joint
    std::assert_eq!(route.segments().len(), 2);
    std::assert_eq!(route.len(), 21);
    std::assert_eq!(route.first(), waypoints[0].point);
    std::assert_eq!(route.last(), waypoints[2].point);

    let summary = animator.summarize(&route).unwrap();
    std::assert_eq!(summary.segments, 2);
    std::assert_eq!(summary.samples, 21);
    std::assert!(summary.ground_distance_m > 9000.0 && summary.ground_distance_m < 12000.0);
    std::assert!(summary.distance_label.unwrap().ends_with(" km"));
    std::assert_eq!(summary.map_style, "streets-v12");
}

#[test]
fn test_route_geojson() {
    let animator = travel_animator();
    let waypoints = kerala_waypoints();
    let route = animator.build_route(&waypoints).unwrap();
    let geojson = animator.route_geojson(&route, &waypoints);

    std::assert_eq!(geojson["type"], "FeatureCollection");
    let features = geojson["features"].as_array().unwrap();
    std::assert_eq!(features.len(), 4);
    std::assert_eq!(features[0]["geometry"]["type"], "LineString");
    std::assert_eq!(features[0]["geometry"]["coordinates"].as_array().unwrap().len(), 21);
    std::assert_eq!(features[1]["properties"]["role"], "start");
    std::assert_eq!(features[3]["properties"]["label"], "Aluva");
}

#[test]
fn test_unresolved_waypoint_rejected() {
    let animator = travel_animator();
    let mut waypoints = kerala_waypoints();
    waypoints[1] = Waypoint::unresolved(WaypointRole::Intermediate, Some("Nowhere".to_string()));

    match animator.build_route(&waypoints) {
        Err(AnimError::MissingCoordinates { index, label }) => {
            std::assert_eq!(index, 1);
            std::assert_eq!(label.as_deref(), Some("Nowhere"));
        }
        other => panic!("expected MissingCoordinates, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_complete_animation_workflow() {
    let travel = travel_animator();
    let route = travel.build_route(&kerala_waypoints()).unwrap();
    let destination = route.last();
    let config = travel.animation_config();

    let mut animator = travel.animator(ManualScheduler::new(), RecordingRenderer::new());
    animator.start(route, &config).unwrap();

    let report = FixedStepDriver::new(travel.settings().animation.frame_step_ms).run(&mut animator);
    std::assert_eq!(report.phase, AnimationPhase::Completed);
    std::assert_eq!(report.frames, 11);
    std::assert_eq!(animator.phase(), AnimationPhase::Completed);

    let renderer = animator.renderer();
    std::assert_eq!(renderer.frames.len(), 11);
    std::assert!(renderer.frames.windows(2).all(|w| w[0].progress <= w[1].progress));

    let last = renderer.last_frame().unwrap();
    std::assert_eq!(last.progress, 1.0);
    std::assert_eq!(Some(last.current), destination);
    std::assert_eq!(last.path_len, 21);

    // Follow stops past the threshold; one settle at the end
    std::assert_eq!(renderer.follows.len(), 10);
    std::assert_eq!(renderer.settles.len(), 1);
    std::assert_eq!(animator.scheduler().pending(), 0);
}

#[test]
fn test_restart_replaces_running_animation() {
    let travel = travel_animator();
    let config = travel.animation_config();
    let mut animator = travel.animator(ManualScheduler::new(), RecordingRenderer::new());

    animator.start(travel.build_route(&kerala_waypoints()).unwrap(), &config).unwrap();
    let stale = animator.scheduler_mut().next_frame().unwrap();
    animator.on_frame(stale, 0.0);

    let short = vec![
        Waypoint::resolved(Point::new(0.0, 0.0), WaypointRole::Start),
        Waypoint::resolved(Point::new(10.0, 0.0), WaypointRole::End),
    ];
    animator.start(travel.build_route(&short).unwrap(), &config).unwrap();
    std::assert_eq!(animator.phase(), AnimationPhase::Running);
    std::assert_eq!(animator.route().map(|r| r.len()), Some(11));

    let report = FixedStepDriver::new(100.0).run(&mut animator);
    std::assert_eq!(report.phase, AnimationPhase::Completed);
    std::assert_eq!(animator.renderer().last_frame().map(|f| f.current), Some(Point::new(10.0, 0.0)));
}

#[test]
fn test_sample_count_override() {
    let animator = travel_animator();
    let waypoints = kerala_waypoints();

    let route = animator.build_route_with(&waypoints, 5).unwrap();
    std::assert_eq!(route.len(), 9);
    std::assert_eq!(route.last(), waypoints[2].point);
    std::assert_ne!(route.len(), animator.build_route(&waypoints).unwrap().len());
}

#[test]
fn test_animation_timing() {
    let animator = travel_animator();
    let route = animator.build_route(&kerala_waypoints()).unwrap();

    let configured = animator.animation_config_for(&route, Timing::Configured).unwrap();
    std::assert_eq!(configured.duration_ms, 1000.0);

    let export = animator.animation_config_for(&route, Timing::ExportLength).unwrap();
    std::assert_eq!(export.duration_ms, 20000.0);

    let timed = animator.animation_config_for(&route, Timing::Velocity(0.01)).unwrap();
    std::assert!((timed.duration_ms - route.total_length() / 0.01 * 1000.0).abs() < 1e-6);

    std::assert!(matches!(
        animator.animation_config_for(&route, Timing::Velocity(-1.0)),
        Err(AnimError::InvalidInput(_))
    ));
}

#[test]
fn test_configured_velocity() {
    let settings = Settings::from_str("[animation]\nvelocity = 0.02\n").unwrap();
    let animator = TravelAnimator::new(settings).unwrap();
    let route = animator.build_route(&kerala_waypoints()).unwrap();

    let config = animator.animation_config_for(&route, Timing::Configured).unwrap();
    std::assert!((config.duration_ms - route.total_length() / 0.02 * 1000.0).abs() < 1e-6);
}
