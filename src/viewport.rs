//! Viewport geometry and intersection-style visibility tracking.

use egui::Rect;

use crate::config::DESKTOP_BREAKPOINT;

/// Size of the visible page area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_desktop(&self) -> bool {
        self.width >= DESKTOP_BREAKPOINT
    }
}

/// Fraction of `target` that lies inside `viewport`, in [0, 1].
pub fn intersection_ratio(target: Rect, viewport: Rect) -> f32 {
    let area = target.width().max(0.0) * target.height().max(0.0);
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = target.intersect(viewport);
    let visible = overlap.width().max(0.0) * overlap.height().max(0.0);
    (visible / area).clamp(0.0, 1.0)
}

/// Visibility edge reported by [`VisibilityObserver::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Left,
}

/// Reports threshold crossings of a stream of intersection ratios.
///
/// The first observation always reports the current side of the threshold if
/// it is visible, mirroring how an intersection observer delivers an initial
/// entry. A `once` observer disconnects after its first `Entered`.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f32,
    once: bool,
    intersecting: Option<bool>,
    disconnected: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            once: false,
            intersecting: None,
            disconnected: false,
        }
    }

    /// Observer that stops after the first time the target becomes visible.
    pub fn once(threshold: f32) -> Self {
        Self {
            once: true,
            ..Self::new(threshold)
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_connected(&self) -> bool {
        !self.disconnected
    }

    /// Feed the latest ratio; returns a change when the threshold is crossed.
    pub fn observe(&mut self, ratio: f32) -> Option<VisibilityChange> {
        if self.disconnected {
            return None;
        }
        let now = ratio >= self.threshold && ratio > 0.0;
        let change = match (self.intersecting, now) {
            (None, true) | (Some(false), true) => Some(VisibilityChange::Entered),
            (Some(true), false) => Some(VisibilityChange::Left),
            _ => None,
        };
        self.intersecting = Some(now);
        if self.once && change == Some(VisibilityChange::Entered) {
            self.disconnected = true;
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_ratio_of_partial_overlap() {
        let target = Rect::from_min_size(pos2(0.0, 90.0), vec2(100.0, 100.0));
        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 100.0));
        assert!((intersection_ratio(target, viewport) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_ratio_outside_and_degenerate() {
        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 100.0));
        let below = Rect::from_min_size(pos2(0.0, 500.0), vec2(100.0, 100.0));
        assert_eq!(intersection_ratio(below, viewport), 0.0);
        let empty = Rect::from_min_size(pos2(10.0, 10.0), vec2(0.0, 50.0));
        assert_eq!(intersection_ratio(empty, viewport), 0.0);
    }

    #[test]
    fn test_observer_reports_crossings_only() {
        let mut obs = VisibilityObserver::new(0.1);
        assert_eq!(obs.observe(0.0), None);
        assert_eq!(obs.observe(0.05), None);
        assert_eq!(obs.observe(0.1), Some(VisibilityChange::Entered));
        assert_eq!(obs.observe(0.8), None);
        assert_eq!(obs.observe(0.09), Some(VisibilityChange::Left));
        assert_eq!(obs.observe(0.0), None);
    }

    #[test]
    fn test_observer_initial_visible_entry() {
        let mut obs = VisibilityObserver::new(0.2);
        assert_eq!(obs.observe(1.0), Some(VisibilityChange::Entered));
    }

    #[test]
    fn test_once_observer_disconnects() {
        let mut obs = VisibilityObserver::once(0.2);
        assert_eq!(obs.observe(0.5), Some(VisibilityChange::Entered));
        assert!(!obs.is_connected());
        assert_eq!(obs.observe(0.0), None);
        assert_eq!(obs.observe(0.5), None);
    }

    #[test]
    fn test_desktop_breakpoint() {
        assert!(Viewport::new(768.0, 600.0).is_desktop());
        assert!(!Viewport::new(767.0, 600.0).is_desktop());
    }
}
