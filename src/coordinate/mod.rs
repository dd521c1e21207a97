//! Coordinate handling for geographic route data
//!
//! This module provides the canonical point type, bounding boxes used for
//! camera fitting, Web Mercator helpers and the boundary normalization of
//! loosely shaped coordinate inputs.

mod bbox;
mod normalize;
mod point;
mod transform;


// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::normalize::{normalize_json, RawCoordinates};
pub use self::point::Point;
pub use self::transform::CoordinateTransformer;
