//! Tests for animation config validation and velocity-derived durations

extern crate std;

use super::test_utils::horizontal_route;
use crate::animation::AnimationConfig;
use crate::coordinate::Point;
use crate::errors::AnimError;
use crate::route::Route;

#[test]
fn test_duration_for_velocity() {
    let route = horizontal_route();
    let length = route.total_length();
    std::assert!(length > 10.0);

    let duration = AnimationConfig::duration_for_velocity(&route, 2.0).unwrap();
    std::assert!((duration - length / 2.0 * 1000.0).abs() < 1e-9);

    // Twice the speed, half the time
    let faster = AnimationConfig::duration_for_velocity(&route, 4.0).unwrap();
    std::assert!((faster * 2.0 - duration).abs() < 1e-9);
}

#[test]
fn test_duration_for_velocity_rejects_bad_speed() {
    let route = horizontal_route();
    for velocity in [0.0, -1.0, f64::NAN, f64::INFINITY].iter() {
        let result = AnimationConfig::duration_for_velocity(&route, *velocity);
        std::assert!(matches!(result, Err(AnimError::InvalidInput(_))), "accepted {}", velocity);
    }
}

#[test]
fn test_duration_for_velocity_rejects_zero_length_route() {
    let point = Point::new(3.0, 4.0);
    let route = Route::from_samples(vec![point, point, point]);
    let result = AnimationConfig::duration_for_velocity(&route, 1.0);
    std::assert!(matches!(result, Err(AnimError::InvalidInput(_))));
}

#[test]
fn test_config_validation() {
    std::assert!(AnimationConfig::default().validate().is_ok());
    std::assert!(AnimationConfig::with_duration(0.0).validate().is_err());
    std::assert!(AnimationConfig { max_fps: Some(-1.0), ..AnimationConfig::default() }.validate().is_err());
    std::assert!(AnimationConfig { follow_threshold: 1.5, ..AnimationConfig::default() }.validate().is_err());
}
