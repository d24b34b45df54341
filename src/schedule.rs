//! Frame scheduling and one-shot timers.
//!
//! The effects never loop on their own: each frame asks a [`FrameScheduler`]
//! for the next callback and holds on to the returned handle so it can be
//! cancelled. [`ManualScheduler`] fires callbacks on demand (headless use and
//! tests); [`RepaintScheduler`] maps requests onto egui repaints.

use std::collections::BTreeSet;

/// Identifies one scheduled frame callback.
pub type FrameHandle = u64;

/// Host frame loop seen from an effect.
pub trait FrameScheduler {
    /// Schedule a single callback for the next frame.
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a callback that has not fired yet. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

/// Scheduler whose callbacks fire only when the owner says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: FrameHandle,
    pending: BTreeSet<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks scheduled but not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total requests ever made.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total successful cancellations.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Pop every pending callback, oldest first. The caller runs them.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        self.requested += 1;
        self.pending.insert(self.next);
        self.next
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.remove(&handle) {
            self.cancelled += 1;
        }
    }
}

/// Scheduler that asks egui for another repaint per request.
///
/// A frame is "due" on the next `update` after it was requested; the host
/// calls [`RepaintScheduler::take_due`] at the start of each update.
pub struct RepaintScheduler {
    ctx: egui::Context,
    inner: ManualScheduler,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            inner: ManualScheduler::new(),
        }
    }

    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        self.inner.take_due()
    }

    pub fn pending(&self) -> usize {
        self.inner.pending()
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.ctx.request_repaint();
        self.inner.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.inner.cancel_frame(handle);
    }
}

/// One-shot deadline. Arming again replaces the previous deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timeout {
    deadline: Option<f64>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now: f64, delay: f64) {
        self.deadline = Some(now + delay);
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Seconds until the deadline, if armed.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|d| (d - now).max(0.0))
    }

    /// True exactly once when `now` reaches the deadline.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_tracks_pending() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame();
        let b = s.request_frame();
        assert_ne!(a, b);
        assert_eq!(s.pending(), 2);
        s.cancel_frame(a);
        assert_eq!(s.pending(), 1);
        assert_eq!(s.cancelled(), 1);
        s.cancel_frame(a);
        assert_eq!(s.cancelled(), 1);
        assert_eq!(s.take_due(), vec![b]);
        assert_eq!(s.pending(), 0);
        assert_eq!(s.requested(), 2);
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut t = Timeout::new();
        assert!(!t.fire(10.0));
        t.arm(1.0, 0.2);
        assert!(!t.fire(1.1));
        assert!((t.remaining(1.1).unwrap_or_default() - 0.1).abs() < 1e-9);
        assert!(t.fire(1.2));
        assert!(!t.fire(1.3));
    }

    #[test]
    fn test_timeout_rearm_debounces() {
        let mut t = Timeout::new();
        t.arm(0.0, 0.2);
        t.arm(0.15, 0.2);
        assert!(!t.fire(0.25));
        assert!(t.fire(0.35));
    }
}
