//! Route animation command
//!
//! Runs the animator over the route to completion, either on a simulated
//! fixed-step clock or in real time. Progress is shown with a progress bar and
//! every rendered frame can be written as one JSON object per line.

use std::cell::Cell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::rc::Rc;

use clap::ArgMatches;
use log::{debug, info, warn};
use serde::Serialize;

use crate::animation::{
    AnimationPhase, CameraRequest, FixedStepDriver, FrameUpdate, ManualScheduler, RealtimeDriver, RouteRenderer,
};
use crate::api::{Timing, TravelAnimator};
use crate::commands::command_traits::Command;
use crate::commands::{sample_count_arg, waypoints_from_args};
use crate::errors::{AnimError, AnimResult};
use crate::route::Waypoint;
use crate::utils::ProgressTracker;

/// One line of the frame log
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum FrameRecord {
    Frame { index: usize, progress: f64, lng: f64, lat: f64, path_len: usize },
    Follow { lng: f64, lat: f64, zoom: f64, bearing: f64, pitch: f64 },
    Settle { lng: f64, lat: f64, zoom: f64 },
}

/// Renderer showing progress on the console and logging frames to a writer
struct ConsoleRenderer {
    progress: ProgressTracker,
    output: Option<BufWriter<File>>,
    frames: usize,
    /// First write failure; frame callbacks have no error path
    error: Option<io::Error>,
}

impl ConsoleRenderer {
    fn new(output: Option<BufWriter<File>>) -> Self {
        ConsoleRenderer {
            progress: ProgressTracker::for_fraction("Animating"),
            output,
            frames: 0,
            error: None,
        }
    }

    fn record(&mut self, record: &FrameRecord) {
        if self.error.is_some() {
            return;
        }
        if let Some(output) = self.output.as_mut() {
            let result = serde_json::to_writer(&mut *output, record)
                .map_err(io::Error::from)
                .and_then(|_| writeln!(output));
            if let Err(e) = result {
                warn!("Stopped writing frames: {}", e);
                self.error = Some(e);
            }
        }
    }

    /// Flush the frame log and close the progress bar
    fn finish(&mut self, phase: AnimationPhase) -> AnimResult<()> {
        if phase == AnimationPhase::Completed {
            self.progress.finish();
        } else {
            self.progress.abandon(&format!("Stopped ({})", phase));
        }

        if let Some(e) = self.error.take() {
            return Err(AnimError::IoError(e));
        }
        if let Some(output) = self.output.as_mut() {
            output.flush()?;
        }
        Ok(())
    }
}

impl RouteRenderer for ConsoleRenderer {
    fn draw_frame(&mut self, frame: &FrameUpdate<'_>) {
        self.frames += 1;
        self.progress.set_fraction(frame.progress);
        self.record(&FrameRecord::Frame {
            index: frame.index,
            progress: frame.progress,
            lng: frame.current.lng,
            lat: frame.current.lat,
            path_len: frame.path_so_far.len(),
        });
    }

    fn follow_camera(&mut self, camera: &CameraRequest) {
        self.record(&FrameRecord::Follow {
            lng: camera.center.lng,
            lat: camera.center.lat,
            zoom: camera.zoom,
            bearing: camera.bearing,
            pitch: camera.pitch,
        });
    }

    fn settle_camera(&mut self, camera: &CameraRequest) {
        debug!("Settling camera at {} zoom {:.2}", camera.center, camera.zoom);
        self.record(&FrameRecord::Settle {
            lng: camera.center.lng,
            lat: camera.center.lat,
            zoom: camera.zoom,
        });
    }
}

/// `--velocity` or `--export-length`, falling back to the settings
pub(crate) fn timing_arg(args: &ArgMatches) -> AnimResult<Timing> {
    if let Some(value) = args.get_one::<String>("velocity") {
        return value.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(Timing::Velocity)
            .ok_or_else(|| AnimError::InvalidInput(format!("Invalid velocity: {}", value)));
    }
    if args.get_flag("export-length") {
        return Ok(Timing::ExportLength);
    }
    Ok(Timing::Configured)
}

/// Command for running the animation to completion
pub struct AnimateCommand<'a> {
    waypoints: Vec<Waypoint>,
    /// Samples per segment
    sample_count: usize,
    /// Where the traversal duration comes from
    timing: Timing,
    /// Use the wall clock instead of the simulated one
    realtime: bool,
    /// Frame rate of the realtime loop
    fps: f64,
    /// Frame log output path
    frames_path: Option<String>,
    animator: &'a TravelAnimator,
}

impl<'a> AnimateCommand<'a> {
    /// Create a new animate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `animator` - Configured library facade
    ///
    /// # Returns
    /// A new AnimateCommand instance or an error
    pub fn new(args: &ArgMatches, animator: &'a TravelAnimator) -> AnimResult<Self> {
        let waypoints = waypoints_from_args(args)?;
        let realtime = args.get_flag("realtime");
        let fps = match args.get_one::<String>("fps") {
            Some(value) => value.parse::<f64>()
                .ok()
                .filter(|fps| fps.is_finite() && *fps > 0.0)
                .ok_or_else(|| AnimError::InvalidInput(format!("Invalid frame rate: {}", value)))?,
            None => 60.0,
        };
        let frames_path = args.get_one::<String>("frames").cloned();
        let sample_count = sample_count_arg(args)?.unwrap_or(animator.settings().curve.sample_count);
        let timing = timing_arg(args)?;

        Ok(AnimateCommand { waypoints, sample_count, timing, realtime, fps, frames_path, animator })
    }
}

impl<'a> Command for AnimateCommand<'a> {
    fn execute(&self) -> AnimResult<()> {
        let route = self.animator.build_route_with(&self.waypoints, self.sample_count)?;
        let mut config = self.animator.animation_config_for(&route, self.timing)?;
        config.sample_count_per_segment = self.sample_count;

        let output = match &self.frames_path {
            Some(path) => {
                info!("Writing frames to {}", path);
                Some(BufWriter::new(File::create(path)?))
            }
            None => None,
        };

        let mut animator = self.animator.animator(ManualScheduler::new(), ConsoleRenderer::new(output));
        let completed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&completed);
        animator.on_complete(move || flag.set(true));

        animator.start(route, &config)?;

        let report = if self.realtime {
            info!("Running in real time at {:.0} fps", self.fps);
            RealtimeDriver::with_fps(self.fps).run(&mut animator)
        } else {
            let step = self.animator.settings().animation.frame_step_ms;
            info!("Running on a simulated clock, {:.2} ms per frame", step);
            FixedStepDriver::new(step).run(&mut animator)
        };

        animator.renderer_mut().finish(report.phase)?;
        info!("Animation {}: {} frames delivered, {} rendered, {:.0} ms",
              report.phase, report.frames, animator.renderer().frames, report.elapsed_ms);

        if !completed.get() {
            return Err(AnimError::GenericError(format!("Animation stopped in phase {}", report.phase)));
        }
        Ok(())
    }
}
