//! Curve construction between route points
//!
//! This module turns a pair of points into a dense, smooth sequence of
//! samples suitable both for drawing a line and for driving an animation.

mod bezier;
mod builder;

#[cfg(test)]
mod tests;

pub use self::bezier::{cubic, quadratic};
pub use self::builder::{
    Curvature, CurveKind, PathCurveBuilder, DEFAULT_CURVATURE_FACTOR, DEFAULT_SAMPLE_COUNT,
};
