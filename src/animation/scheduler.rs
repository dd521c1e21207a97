//! Frame scheduling abstraction
//!
//! The host's "call me on the next display frame" primitive, reduced to
//! request/cancel by handle. Production hosts back it with their display
//! clock; tests and the CLI use the deterministic [`ManualScheduler`].

use std::collections::VecDeque;

/// Handle of a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        FrameHandle(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host frame-scheduling capability
pub trait FrameScheduler {
    /// Ask for one callback on the next frame
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a previously requested frame; unknown handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

/// Scheduler that queues frame requests until the caller delivers them
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        ManualScheduler::default()
    }

    /// Pop the oldest outstanding frame request
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.queue.pop_front()
    }

    /// Number of outstanding frame requests
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total number of frames ever requested
    pub fn requested_count(&self) -> usize {
        self.requested
    }

    /// Number of outstanding requests that were cancelled
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queue.push_back(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(pos) = self.queue.iter().position(|h| *h == handle) {
            self.queue.remove(pos);
            self.cancelled += 1;
        }
    }
}
