//! Horizontal swipe recognition for the content sliders.
//!
//! Only the horizontal distance between touch start and touch end matters:
//! - Swipe left (finger moves left past the threshold) → next slide
//! - Swipe right → previous slide
//! - Anything shorter is ignored

use crate::config::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Slider navigation request produced by touch or keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCommand {
    Next,
    Prev,
}

impl From<SwipeDirection> for SlideCommand {
    fn from(dir: SwipeDirection) -> Self {
        match dir {
            SwipeDirection::Left => SlideCommand::Next,
            SwipeDirection::Right => SlideCommand::Prev,
        }
    }
}

/// Map arrow keys onto slide commands.
pub fn key_command(key: egui::Key) -> Option<SlideCommand> {
    match key {
        egui::Key::ArrowLeft => Some(SlideCommand::Prev),
        egui::Key::ArrowRight => Some(SlideCommand::Next),
        _ => None,
    }
}

/// Tracks one touch from start to end.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Process touch start event. A new start replaces any unfinished touch.
    pub fn touch_start(&mut self, x: f32, id: u64) {
        self.start = Some(TouchPoint { x, id });
    }

    /// Process touch end event. Returns the swipe, if any.
    pub fn touch_end(&mut self, x: f32, id: u64) -> Option<SwipeDirection> {
        let start = match self.start {
            Some(s) if s.id == id => s,
            _ => return None,
        };
        self.start = None;

        let dx = x - start.x;
        if -dx > self.threshold {
            Some(SwipeDirection::Left)
        } else if dx > self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Drop an in-flight touch (cancelled by the platform).
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_is_next() {
        let mut t = SwipeTracker::new();
        t.touch_start(300.0, 1);
        let dir = t.touch_end(200.0, 1);
        assert_eq!(dir, Some(SwipeDirection::Left));
        assert_eq!(dir.map(SlideCommand::from), Some(SlideCommand::Next));
        assert!(!t.is_tracking());
    }

    #[test]
    fn test_swipe_right_is_prev() {
        let mut t = SwipeTracker::new();
        t.touch_start(10.0, 1);
        let dir = t.touch_end(200.0, 1);
        assert_eq!(dir.map(SlideCommand::from), Some(SlideCommand::Prev));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut t = SwipeTracker::new();
        t.touch_start(100.0, 1);
        assert_eq!(t.touch_end(50.0, 1), None);
        t.touch_start(100.0, 1);
        assert_eq!(t.touch_end(150.0, 1), None);
        t.touch_start(100.0, 1);
        assert_eq!(t.touch_end(49.0, 1), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_end_without_start_or_other_finger() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.touch_end(0.0, 1), None);
        t.touch_start(300.0, 1);
        assert_eq!(t.touch_end(0.0, 2), None);
        assert!(t.is_tracking());
        t.cancel();
        assert_eq!(t.touch_end(0.0, 1), None);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_command(egui::Key::ArrowLeft), Some(SlideCommand::Prev));
        assert_eq!(key_command(egui::Key::ArrowRight), Some(SlideCommand::Next));
        assert_eq!(key_command(egui::Key::Enter), None);
    }
}
