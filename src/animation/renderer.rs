//! Rendering collaborator interface
//!
//! The animator never draws anything itself. Every frame it hands the
//! current position and the travelled part of the route to a renderer, which
//! owns the actual line layer, marker and camera.

use super::camera::CameraRequest;
use crate::coordinate::Point;

/// Per-frame render request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate<'a> {
    /// Marker position
    pub current: Point,
    /// Route samples from the start up to and including `current`
    pub path_so_far: &'a [Point],
    /// Progress fraction in [0, 1]
    pub progress: f64,
    /// Index of `current` in the route samples
    pub index: usize,
}

/// Map-rendering capability driven by the animator
pub trait RouteRenderer {
    /// Redraw the travelled line and move the marker
    fn draw_frame(&mut self, frame: &FrameUpdate<'_>);

    /// Centre the camera on the marker
    fn follow_camera(&mut self, camera: &CameraRequest);

    /// Final camera move once the animation completes
    fn settle_camera(&mut self, _camera: &CameraRequest) {}
}

impl<T: RouteRenderer + ?Sized> RouteRenderer for &mut T {
    fn draw_frame(&mut self, frame: &FrameUpdate<'_>) {
        (**self).draw_frame(frame)
    }

    fn follow_camera(&mut self, camera: &CameraRequest) {
        (**self).follow_camera(camera)
    }

    fn settle_camera(&mut self, camera: &CameraRequest) {
        (**self).settle_camera(camera)
    }
}

/// Copy of a rendered frame kept by [`RecordingRenderer`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedFrame {
    pub current: Point,
    pub progress: f64,
    pub index: usize,
    pub path_len: usize,
}

/// Renderer that records every request, for tests and offline playback
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RecordedFrame>,
    pub follows: Vec<CameraRequest>,
    pub settles: Vec<CameraRequest>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        RecordingRenderer::default()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl RouteRenderer for RecordingRenderer {
    fn draw_frame(&mut self, frame: &FrameUpdate<'_>) {
        self.frames.push(RecordedFrame {
            current: frame.current,
            progress: frame.progress,
            index: frame.index,
            path_len: frame.path_so_far.len(),
        });
    }

    fn follow_camera(&mut self, camera: &CameraRequest) {
        self.follows.push(*camera);
    }

    fn settle_camera(&mut self, camera: &CameraRequest) {
        self.settles.push(*camera);
    }
}
