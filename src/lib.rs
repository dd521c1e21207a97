pub mod errors;
pub mod coordinate;
pub mod curve;
pub mod route;
pub mod animation;
pub mod geocode;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{RouteSummary, Timing, TravelAnimator};

pub use errors::{AnimError, AnimResult};
pub use coordinate::{BoundingBox, CoordinateTransformer, Point};
pub use curve::{Curvature, CurveKind, PathCurveBuilder};
pub use route::{Route, Segment, Waypoint, WaypointRole};
pub use animation::{AnimationConfig, AnimationPhase, FrameScheduler, RouteAnimator, RouteRenderer};
pub use config::Settings;
