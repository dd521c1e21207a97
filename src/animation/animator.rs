//! Time-driven marker traversal of a route
//!
//! The animator owns the route and the animation state. The host delivers
//! frames through [`RouteAnimator::on_frame`]; each frame maps elapsed time to
//! progress, progress to a sample index, and pushes the result to the
//! renderer. Everything that can fail is checked in `start`, so frame handling
//! itself has no error path.

use log::{debug, info, warn};

use super::camera::CameraSettings;
use super::renderer::{FrameUpdate, RouteRenderer};
use super::scheduler::{FrameHandle, FrameScheduler};
use super::state::{AnimationConfig, AnimationPhase, AnimationState, FrameOutcome};
use crate::curve::PathCurveBuilder;
use crate::errors::{AnimError, AnimResult};
use crate::route::{Route, Waypoint};

type Callback = Box<dyn FnMut()>;

/// Drives one marker along a route, one host frame at a time
pub struct RouteAnimator<S: FrameScheduler, R: RouteRenderer> {
    scheduler: S,
    renderer: R,
    camera: CameraSettings,
    route: Option<Route>,
    config: AnimationConfig,
    state: AnimationState,
    /// The only frame this animator will act on
    pending: Option<FrameHandle>,
    last_render_ms: Option<f64>,
    on_complete: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl<S: FrameScheduler, R: RouteRenderer> RouteAnimator<S, R> {
    /// Create an idle animator
    ///
    /// # Arguments
    /// * `scheduler` - Host frame scheduler
    /// * `renderer` - Map renderer receiving frame and camera requests
    pub fn new(scheduler: S, renderer: R) -> Self {
        RouteAnimator {
            scheduler,
            renderer,
            camera: CameraSettings::default(),
            route: None,
            config: AnimationConfig::default(),
            state: AnimationState::default(),
            pending: None,
            last_render_ms: None,
            on_complete: None,
            on_cancel: None,
        }
    }

    /// Replace the camera settings used for follow and settle requests
    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    /// Register the completion callback, fired once per completed traversal
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    /// Register the cancellation callback, fired when a running traversal is stopped
    pub fn on_cancel<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_cancel = Some(Box::new(callback));
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn phase(&self) -> AnimationPhase {
        self.state.phase
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle of the frame the animator is waiting for
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Start traversing `route`
    ///
    /// Input is validated before anything changes: on error the animator is
    /// left exactly as it was. A running traversal is cancelled (without
    /// completion) before the new one begins.
    ///
    /// # Arguments
    /// * `route` - Route with at least 2 samples
    /// * `config` - Duration, follow threshold and frame cap
    ///
    /// # Returns
    /// `InvalidInput` when the route or config is unusable
    pub fn start(&mut self, route: Route, config: &AnimationConfig) -> AnimResult<()> {
        config.validate()?;
        if route.len() < 2 {
            warn!("Refusing to animate a route with {} samples", route.len());
            return Err(AnimError::InvalidInput(format!(
                "Route needs at least 2 samples to animate, got {}", route.len()
            )));
        }

        if self.state.phase == AnimationPhase::Running {
            info!("Cancelling running animation before restart");
            self.cancel();
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }

        let reference_length = route.total_length();
        info!("Starting animation: {} samples, {:.1} ms, reference length {:.6}",
              route.len(), config.duration_ms, reference_length);

        self.state = AnimationState::running(config.duration_ms, route.first(), reference_length);
        self.route = Some(route);
        self.config = *config;
        self.last_render_ms = None;
        self.pending = Some(self.scheduler.request_frame());
        Ok(())
    }

    /// Build a route from waypoints and start traversing it
    pub fn start_waypoints(
        &mut self,
        waypoints: &[Waypoint],
        builder: &PathCurveBuilder,
        config: &AnimationConfig,
    ) -> AnimResult<()> {
        config.validate()?;
        let route = Route::from_waypoints(
            waypoints,
            builder,
            config.sample_count_per_segment,
            config.dedupe_joints,
        )?;
        self.start(route, config)
    }

    /// Process one host frame
    ///
    /// # Arguments
    /// * `handle` - Handle the host is calling back for
    /// * `now_ms` - Monotonic host timestamp in milliseconds
    ///
    /// # Returns
    /// `Ignored` for frames that are stale or arrive while not running
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) -> FrameOutcome {
        if self.state.phase != AnimationPhase::Running || self.pending != Some(handle) {
            debug!("Ignoring frame {:?} (phase {}, pending {:?})", handle, self.state.phase, self.pending);
            return FrameOutcome::Ignored;
        }
        self.pending = None;

        let route = match self.route.as_ref() {
            Some(route) => route,
            None => return FrameOutcome::Ignored,
        };

        let start = *self.state.start_timestamp.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        let progress = (elapsed / self.config.duration_ms).min(1.0).max(self.state.progress);

        let samples = route.samples();
        let index = route.index_at(progress);
        let current = samples[index];

        self.state.progress = progress;
        self.state.elapsed_ms = elapsed;
        self.state.sample_index = index;
        self.state.current = Some(current);

        let finished = progress >= 1.0;
        let frame_due = match (self.config.max_fps, self.last_render_ms) {
            (Some(fps), Some(last)) => now_ms - last >= 1000.0 / fps,
            _ => true,
        };

        if finished || frame_due {
            debug!("Frame at {:.1} ms: progress {:.4}, sample {}/{}", now_ms, progress, index, samples.len() - 1);
            self.renderer.draw_frame(&FrameUpdate {
                current,
                path_so_far: &samples[..=index],
                progress,
                index,
            });
            self.last_render_ms = Some(now_ms);

            if progress < self.config.follow_threshold {
                let previous = index.checked_sub(1).map(|i| &samples[i]);
                let request = self.camera.follow_request(&current, previous);
                self.renderer.follow_camera(&request);
            }
        }

        if !finished {
            self.pending = Some(self.scheduler.request_frame());
            return FrameOutcome::Continued { progress };
        }

        if let Some(bounds) = route.bounds() {
            let request = self.camera.fit_bounds(&bounds);
            self.renderer.settle_camera(&request);
        }

        self.state.phase = AnimationPhase::Completed;
        info!("Animation completed after {:.1} ms", elapsed);
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        FrameOutcome::Completed
    }

    /// Stop a running traversal
    ///
    /// # Returns
    /// `true` if a running animation was cancelled, `false` if there was nothing to cancel
    pub fn cancel(&mut self) -> bool {
        if self.state.phase != AnimationPhase::Running {
            return false;
        }

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state.phase = AnimationPhase::Cancelled;
        info!("Animation cancelled at progress {:.4}", self.state.progress);

        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
        true
    }

    /// Cancel if running, drop the route and return to idle
    pub fn reset(&mut self) {
        self.cancel();
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.route = None;
        self.state = AnimationState::default();
        self.last_render_ms = None;
    }
}

impl<S: FrameScheduler, R: RouteRenderer> Drop for RouteAnimator<S, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
