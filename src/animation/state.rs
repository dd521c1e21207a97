//! Animation configuration and lifecycle state

use std::fmt;

use crate::coordinate::Point;
use crate::curve::DEFAULT_SAMPLE_COUNT;
use crate::errors::{AnimError, AnimResult};
use crate::route::Route;

/// Default follow threshold; past it the final fit-to-bounds takes over
pub const DEFAULT_FOLLOW_THRESHOLD: f64 = 0.95;

/// Default animation length in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 20_000.0;

/// Parameters accepted when starting an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Wall-clock length of the traversal, > 0
    pub duration_ms: f64,
    /// Curve samples per segment when building from waypoints, >= 2
    pub sample_count_per_segment: usize,
    /// Camera follows the marker while progress is below this, in [0, 1]
    pub follow_threshold: f64,
    /// Optional cap on rendered frames per second
    pub max_fps: Option<f64>,
    /// Drop the repeated joint sample between consecutive segments
    pub dedupe_joints: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            duration_ms: DEFAULT_DURATION_MS,
            sample_count_per_segment: DEFAULT_SAMPLE_COUNT,
            follow_threshold: DEFAULT_FOLLOW_THRESHOLD,
            max_fps: None,
            dedupe_joints: true,
        }
    }
}

impl AnimationConfig {
    /// Config with the given duration and defaults elsewhere
    pub fn with_duration(duration_ms: f64) -> Self {
        AnimationConfig { duration_ms, ..AnimationConfig::default() }
    }

    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> AnimResult<()> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(AnimError::InvalidInput(format!(
                "Duration must be a positive number of milliseconds, got {}", self.duration_ms
            )));
        }
        if self.sample_count_per_segment < 2 {
            return Err(AnimError::InvalidInput(format!(
                "Sample count per segment must be at least 2, got {}", self.sample_count_per_segment
            )));
        }
        if !(0.0..=1.0).contains(&self.follow_threshold) {
            return Err(AnimError::InvalidInput(format!(
                "Follow threshold must be within [0, 1], got {}", self.follow_threshold
            )));
        }
        if let Some(fps) = self.max_fps {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(AnimError::InvalidInput(format!("Frame rate cap must be positive, got {}", fps)));
            }
        }
        Ok(())
    }

    /// Duration for traversing `route` at a constant speed
    ///
    /// # Arguments
    /// * `route` - Route whose reference length (degrees) is used
    /// * `units_per_second` - Speed in degrees per second
    pub fn duration_for_velocity(route: &Route, units_per_second: f64) -> AnimResult<f64> {
        if !(units_per_second.is_finite() && units_per_second > 0.0) {
            return Err(AnimError::InvalidInput(format!("Velocity must be positive, got {}", units_per_second)));
        }
        let duration_ms = route.total_length() / units_per_second * 1000.0;
        if duration_ms <= 0.0 {
            return Err(AnimError::InvalidInput("Route has zero length; no duration can be derived".to_string()));
        }
        Ok(duration_ms)
    }
}

/// Lifecycle phase of the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// No route set, or reset
    #[default]
    Idle,
    /// Frame loop active
    Running,
    /// Progress reached 1.0; completion fired
    Completed,
    /// Stopped before completion
    Cancelled,
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnimationPhase::Idle => "idle",
            AnimationPhase::Running => "running",
            AnimationPhase::Completed => "completed",
            AnimationPhase::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

/// Mutable state of one traversal
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub phase: AnimationPhase,
    /// Progress fraction in [0, 1], never decreasing while running
    pub progress: f64,
    /// Current marker position
    pub current: Option<Point>,
    /// Index of `current` in the route samples
    pub sample_index: usize,
    /// Host timestamp of the first frame, in milliseconds
    pub start_timestamp: Option<f64>,
    pub elapsed_ms: f64,
    pub duration_ms: f64,
    /// Sum of sample-to-sample distances of the route (degrees)
    pub reference_length: f64,
}

impl AnimationState {
    pub(crate) fn running(duration_ms: f64, first: Option<Point>, reference_length: f64) -> Self {
        AnimationState {
            phase: AnimationPhase::Running,
            current: first,
            duration_ms,
            reference_length,
            ..AnimationState::default()
        }
    }
}

/// What a delivered frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Stale or unexpected frame; nothing happened
    Ignored,
    /// Frame processed and the next one requested
    Continued { progress: f64 },
    /// Final frame; the animation completed
    Completed,
}
