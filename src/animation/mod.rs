//! Frame-driven route animation
//!
//! This module walks a marker along a [`Route`](crate::route::Route) over a
//! fixed wall-clock duration. The host environment is reached only through
//! two seams: a [`FrameScheduler`] supplying frame callbacks and a
//! [`RouteRenderer`] receiving line, marker and camera updates.

mod animator;
mod camera;
mod driver;
mod renderer;
mod scheduler;
mod state;

#[cfg(test)]
mod tests;

pub use self::animator::RouteAnimator;
pub use self::camera::{CameraRequest, CameraSettings, WORLD_TILE_SIZE};
pub use self::driver::{DriveReport, FixedStepDriver, RealtimeDriver};
pub use self::renderer::{FrameUpdate, RecordedFrame, RecordingRenderer, RouteRenderer};
pub use self::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use self::state::{
    AnimationConfig, AnimationPhase, AnimationState, FrameOutcome, DEFAULT_DURATION_MS,
    DEFAULT_FOLLOW_THRESHOLD,
};
