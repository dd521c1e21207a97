//! Frame loops for hosts without a display clock
//!
//! Both drivers pull outstanding requests from a [`ManualScheduler`] and feed
//! them to the animator, one at a time. The fixed-step driver advances a fake
//! clock by a constant step and is fully deterministic; the realtime driver
//! reads a monotonic clock and sleeps between frames.

use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use super::animator::RouteAnimator;
use super::renderer::RouteRenderer;
use super::scheduler::ManualScheduler;
use super::state::{AnimationPhase, FrameOutcome};

/// Summary of a driven run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveReport {
    /// Frames delivered to the animator
    pub frames: usize,
    /// Clock time at the last delivered frame, relative to the first
    pub elapsed_ms: f64,
    /// Phase after the run
    pub phase: AnimationPhase,
}

/// Deterministic driver advancing a fake clock by `step_ms` per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepDriver {
    pub start_ms: f64,
    pub step_ms: f64,
    /// Safety limit on delivered frames
    pub max_frames: usize,
}

impl FixedStepDriver {
    /// Driver starting at 0 ms with the given step
    pub fn new(step_ms: f64) -> Self {
        FixedStepDriver { start_ms: 0.0, step_ms, max_frames: 1_000_000 }
    }

    /// Deliver frames until the animator completes, stops requesting frames, or the limit is hit
    pub fn run<R: RouteRenderer>(&self, animator: &mut RouteAnimator<ManualScheduler, R>) -> DriveReport {
        let start = self.start_ms;
        let step = self.step_ms;
        drive(animator, self.max_frames, |frame| start + frame as f64 * step, || {})
    }
}

/// Driver reading a monotonic clock and sleeping between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealtimeDriver {
    pub frame_interval: Duration,
    /// Safety limit on delivered frames
    pub max_frames: usize,
}

impl RealtimeDriver {
    /// Driver targeting `fps` frames per second
    pub fn with_fps(fps: f64) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 60.0 };
        RealtimeDriver {
            frame_interval: Duration::from_secs_f64(1.0 / fps),
            max_frames: usize::MAX,
        }
    }

    pub fn run<R: RouteRenderer>(&self, animator: &mut RouteAnimator<ManualScheduler, R>) -> DriveReport {
        let clock = Instant::now();
        let interval = self.frame_interval;
        drive(
            animator,
            self.max_frames,
            |_| clock.elapsed().as_secs_f64() * 1000.0,
            || thread::sleep(interval),
        )
    }
}

fn drive<R, C, W>(
    animator: &mut RouteAnimator<ManualScheduler, R>,
    max_frames: usize,
    mut clock: C,
    mut wait: W,
) -> DriveReport
where
    R: RouteRenderer,
    C: FnMut(usize) -> f64,
    W: FnMut(),
{
    let mut frames = 0;
    let mut first_ms = None;
    let mut last_ms = 0.0;

    while frames < max_frames {
        let handle = match animator.scheduler_mut().next_frame() {
            Some(handle) => handle,
            None => break,
        };

        let now = clock(frames);
        first_ms.get_or_insert(now);
        last_ms = now;
        frames += 1;

        if animator.on_frame(handle, now) == FrameOutcome::Completed {
            break;
        }
        wait();
    }

    let elapsed_ms = last_ms - first_ms.unwrap_or(last_ms);
    debug!("Driver delivered {} frames over {:.1} ms", frames, elapsed_ms);
    DriveReport { frames, elapsed_ms, phase: animator.phase() }
}
