//! Bézier evaluation in longitude/latitude space

use crate::coordinate::Point;

/// Evaluate a quadratic Bézier curve at `t`
pub fn quadratic(p0: &Point, c: &Point, p1: &Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u;
    let b = 2.0 * u * t;
    let d = t * t;

    Point::new(
        a * p0.lng + b * c.lng + d * p1.lng,
        a * p0.lat + b * c.lat + d * p1.lat,
    )
}

/// Evaluate a cubic Bézier curve at `t`
pub fn cubic(p0: &Point, c1: &Point, c2: &Point, p1: &Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;

    Point::new(
        a * p0.lng + b * c1.lng + c * c2.lng + d * p1.lng,
        a * p0.lat + b * c1.lat + c * c2.lat + d * p1.lat,
    )
}

/// Evenly spaced parameter values over [0, 1], both ends included
pub fn parameters(sample_count: usize) -> impl Iterator<Item = f64> {
    let last = (sample_count.max(2) - 1) as f64;
    (0..sample_count).map(move |j| j as f64 / last)
}
