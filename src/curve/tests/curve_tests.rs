//! Tests for the curve builder

extern crate std;

use crate::coordinate::Point;
use crate::curve::{Curvature, CurveKind, PathCurveBuilder};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: &Point, expected: &Point) {
    std::assert!(
        actual.approx_eq(expected, TOLERANCE),
        "expected {:?}, got {:?}", expected, actual
    );
}

#[test]
fn test_sample_count_and_endpoints() {
    let builder = PathCurveBuilder::default();
    let origin = Point::new(76.2673, 9.9312);
    let destination = Point::new(76.3516, 10.1004);

    for count in [2usize, 3, 11, 101] {
        let samples = builder.build_curve(&origin, &destination, count).unwrap();
        std::assert_eq!(samples.len(), count);
        assert_close(&samples[0], &origin);
        assert_close(&samples[count - 1], &destination);
    }
}

#[test]
fn test_rejects_too_few_samples() {
    let builder = PathCurveBuilder::default();
    let err = builder
        .build_curve(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0), 1)
        .unwrap_err();
    std::assert!(err.is_invalid_input());
}

#[test]
fn test_quadratic_fixed_factor_values() {
    let builder = PathCurveBuilder::default();
    let origin = Point::new(0.0, 0.0);
    let destination = Point::new(10.0, 0.0);

    let controls = builder.control_points(&origin, &destination);
    std::assert_eq!(controls.len(), 1);
    assert_close(&controls[0], &Point::new(5.0, 2.0));

    let samples = builder.build_curve(&origin, &destination, 11).unwrap();
    assert_close(&samples[5], &Point::new(5.0, 1.0));
    assert_close(&samples[2], &Point::new(2.0, 0.64));
}

#[test]
fn test_offset_is_left_of_travel() {
    let builder = PathCurveBuilder::default();

    // Northbound segment bows west
    let controls = builder.control_points(&Point::new(0.0, 0.0), &Point::new(0.0, 10.0));
    assert_close(&controls[0], &Point::new(-2.0, 5.0));

    // Reversed direction bows to the other side
    let controls = builder.control_points(&Point::new(10.0, 0.0), &Point::new(0.0, 0.0));
    assert_close(&controls[0], &Point::new(5.0, -2.0));
}

#[test]
fn test_cubic_midpoint() {
    let builder = PathCurveBuilder::new(CurveKind::Cubic, Curvature::default());
    let origin = Point::new(0.0, 0.0);
    let destination = Point::new(10.0, 0.0);

    let controls = builder.control_points(&origin, &destination);
    std::assert_eq!(controls.len(), 2);
    assert_close(&controls[0], &Point::new(10.0 / 3.0, 2.0));
    assert_close(&controls[1], &Point::new(20.0 / 3.0, 2.0));

    let samples = builder.build_curve(&origin, &destination, 3).unwrap();
    assert_close(&samples[1], &Point::new(5.0, 1.5));
}

#[test]
fn test_proportional_curvature() {
    let curvature = Curvature::Proportional { base: 0.1, gain: 0.01, max: 0.3 };

    std::assert!((curvature.factor_for(10.0) - 0.2).abs() < TOLERANCE);
    std::assert!((curvature.factor_for(100.0) - 0.3).abs() < TOLERANCE);

    let builder = PathCurveBuilder::new(CurveKind::Quadratic, curvature);
    let short = builder.control_points(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
    // factor 0.11 on a 1-degree segment
    assert_close(&short[0], &Point::new(0.5, 0.11));
}

#[test]
fn test_straight_builder_is_linear() {
    let builder = PathCurveBuilder::straight();
    let samples = builder
        .build_curve(&Point::new(0.0, 0.0), &Point::new(10.0, 0.0), 11)
        .unwrap();

    for (j, sample) in samples.iter().enumerate() {
        assert_close(sample, &Point::new(j as f64, 0.0));
    }
}

#[test]
fn test_coincident_endpoints() {
    let builder = PathCurveBuilder::new(CurveKind::Cubic, Curvature::default());
    let p = Point::new(76.52179, 9.590026);

    let samples = builder.build_curve(&p, &p, 25).unwrap();
    std::assert_eq!(samples.len(), 25);
    std::assert!(samples.iter().all(|s| *s == p));
}

#[test]
fn test_deterministic() {
    let builder = PathCurveBuilder::default();
    let a = Point::new(-48.8702222, -26.31832);
    let b = Point::new(-48.8619776, -26.3185919);

    let first = builder.build_curve(&a, &b, 101).unwrap();
    let second = builder.build_curve(&a, &b, 101).unwrap();
    std::assert_eq!(first, second);
}

#[test]
fn test_build_segment() {
    let builder = PathCurveBuilder::default();
    let segment = builder
        .build_segment(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0), 5)
        .unwrap();

    std::assert_eq!(segment.origin(), Point::new(0.0, 0.0));
    std::assert_eq!(segment.destination(), Point::new(1.0, 1.0));
    std::assert_eq!(segment.samples().len(), 5);
}
