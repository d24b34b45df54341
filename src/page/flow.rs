//! Mechanics flow diagram: looping dashed curves between consecutive steps.
//!
//! Layout is driven by the measured step centers, so it is recomputed after
//! mount and (debounced) after every resize. The dashed lines draw in once
//! the section is first seen, and can be restarted when the slider swaps the
//! step texts.

use egui::{Color32, Pos2, Vec2};

use crate::config::{
    FLOW_DRAW_DURATION, FLOW_INITIAL_LAYOUT_DELAY, FLOW_LOOPINESS, FLOW_RESIZE_DEBOUNCE,
    FLOW_RESTART_DELAY, FLOW_VISIBILITY_THRESHOLD,
};
use crate::error::LandingError;
use crate::schedule::Timeout;
use crate::viewport::{VisibilityChange, VisibilityObserver};

/// Stroke used for every connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowStyle {
    pub color: Color32,
    pub width: f32,
    pub dash: f32,
    pub gap: f32,
}

impl Default for FlowStyle {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(0xBD, 0xBD, 0xBD),
            width: 2.0,
            dash: 5.0,
            gap: 5.0,
        }
    }
}

/// Quadratic Bézier from one step center to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCurve {
    pub start: Pos2,
    pub control: Pos2,
    pub end: Pos2,
}

impl FlowCurve {
    /// Curve bowing out along the left-hand normal of `start -> end`.
    pub fn between(start: Pos2, end: Pos2) -> Self {
        let d = end - start;
        let distance = d.length();
        let normal = Vec2::new(-d.y, d.x);
        let unit = if normal.length() > 0.0 {
            normal / normal.length()
        } else {
            Vec2::ZERO
        };
        let mid = start + d * 0.5;
        Self {
            start,
            control: mid + unit * (distance * FLOW_LOOPINESS),
            end,
        }
    }

    pub fn point_at(&self, t: f32) -> Pos2 {
        let u = 1.0 - t;
        let p = self.start.to_vec2() * (u * u)
            + self.control.to_vec2() * (2.0 * u * t)
            + self.end.to_vec2() * (t * t);
        p.to_pos2()
    }

    /// Polyline approximation covering the first `progress` of the curve.
    pub fn flatten(&self, segments: usize, progress: f32) -> Vec<Pos2> {
        let segments = segments.max(1);
        let progress = progress.clamp(0.0, 1.0);
        let steps = ((segments as f32) * progress).ceil() as usize;
        (0..=steps)
            .map(|i| {
                let t = (i as f32 / segments as f32).min(progress);
                self.point_at(t)
            })
            .collect()
    }
}

/// Curves joining consecutive steps. Desktop closes the loop back to the
/// first step; mobile stops at the last one.
pub fn connections(centers: &[Pos2], desktop: bool) -> Vec<FlowCurve> {
    let n = centers.len();
    if n == 0 {
        return Vec::new();
    }
    let count = if desktop { n } else { n - 1 };
    (0..count)
        .map(|i| FlowCurve::between(centers[i], centers[(i + 1) % n]))
        .collect()
}

pub struct FlowDiagram {
    step_count: usize,
    curves: Vec<FlowCurve>,
    observer: VisibilityObserver,
    layout_timer: Timeout,
    restart_timer: Timeout,
    /// Time the draw-in animation (re)started, if the lines are animating
    animated_since: Option<f64>,
    pub style: FlowStyle,
}

impl FlowDiagram {
    /// Diagram over `step_count` steps, mounted at `now`.
    pub fn new(step_count: usize, now: f64) -> Result<Self, LandingError> {
        if step_count == 0 {
            return Err(LandingError::new(
                "flow",
                "required elements for flow diagram not found",
            ));
        }
        let mut layout_timer = Timeout::new();
        layout_timer.arm(now, FLOW_INITIAL_LAYOUT_DELAY);
        Ok(Self {
            step_count,
            curves: Vec::new(),
            observer: VisibilityObserver::once(FLOW_VISIBILITY_THRESHOLD),
            layout_timer,
            restart_timer: Timeout::new(),
            animated_since: None,
            style: FlowStyle::default(),
        })
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn curves(&self) -> &[FlowCurve] {
        &self.curves
    }

    pub fn is_animating(&self) -> bool {
        self.animated_since.is_some()
    }

    /// Feed the section's visibility. The first sighting starts the lines;
    /// after that the section is no longer observed.
    pub fn set_intersection(&mut self, ratio: f32, now: f64) {
        if self.observer.observe(ratio) == Some(VisibilityChange::Entered) {
            log::debug!("flow diagram visible, animating lines");
            self.animated_since = Some(now);
        }
    }

    /// Window resized: relayout once resizing settles.
    pub fn on_resize(&mut self, now: f64) {
        self.layout_timer.arm(now, FLOW_RESIZE_DEBOUNCE);
    }

    /// Drop the animation and re-add it shortly after, replaying the draw-in.
    pub fn restart(&mut self, now: f64) {
        self.animated_since = None;
        self.restart_timer.arm(now, FLOW_RESTART_DELAY);
    }

    /// Advance timers. Returns true when the host should measure the step
    /// centers and call [`FlowDiagram::layout`].
    pub fn tick(&mut self, now: f64) -> bool {
        if self.restart_timer.fire(now) {
            self.animated_since = Some(now);
        }
        self.layout_timer.fire(now)
    }

    /// Rebuild curves from measured step centers (container coordinates).
    pub fn layout(&mut self, centers: &[Pos2], desktop: bool) {
        if centers.len() != self.step_count {
            log::warn!(
                "flow diagram expected {} step centers, got {}",
                self.step_count,
                centers.len()
            );
        }
        self.curves = connections(centers, desktop);
    }

    /// Fraction of each line drawn at `now`, in [0, 1].
    pub fn progress(&self, now: f64) -> f32 {
        match self.animated_since {
            Some(since) => ((now - since) / FLOW_DRAW_DURATION).clamp(0.0, 1.0) as f32,
            None => 0.0,
        }
    }

    /// Seconds until the next timer fires, for scheduling repaints.
    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        [
            self.layout_timer.remaining(now),
            self.restart_timer.remaining(now),
        ]
        .into_iter()
        .flatten()
        .reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn approx(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_control_point_bows_along_normal() {
        let c = FlowCurve::between(pos2(0.0, 0.0), pos2(100.0, 0.0));
        // Normal of (100, 0) is (0, 100) → unit (0, 1); offset 0.4 * 100.
        assert!(approx(c.control, pos2(50.0, 40.0)));
        assert!(approx(c.point_at(0.0), c.start));
        assert!(approx(c.point_at(1.0), c.end));
    }

    #[test]
    fn test_coincident_points_have_no_bow() {
        let c = FlowCurve::between(pos2(10.0, 10.0), pos2(10.0, 10.0));
        assert!(approx(c.control, pos2(10.0, 10.0)));
    }

    #[test]
    fn test_desktop_loops_mobile_does_not() {
        let centers = [pos2(0.0, 0.0), pos2(100.0, 0.0), pos2(100.0, 100.0)];
        let desktop = connections(&centers, true);
        assert_eq!(desktop.len(), 3);
        assert!(approx(desktop[2].start, centers[2]));
        assert!(approx(desktop[2].end, centers[0]));
        assert_eq!(connections(&centers, false).len(), 2);
        assert!(connections(&[], true).is_empty());
    }

    #[test]
    fn test_control_point_bows_off_the_chord() {
        let c = FlowCurve::between(pos2(0.0, 0.0), pos2(100.0, 0.0));
        assert!(approx(c.control, pos2(50.0, 40.0)));
    }

    #[test]
    fn test_flatten_respects_progress() {
        let c = FlowCurve::between(pos2(0.0, 0.0), pos2(100.0, 0.0));
        let full = c.flatten(10, 1.0);
        assert_eq!(full.len(), 11);
        assert!(approx(*full.last().unwrap_or(&Pos2::ZERO), c.end));
        let half = c.flatten(10, 0.5);
        assert_eq!(half.len(), 6);
        assert!(approx(*half.last().unwrap_or(&Pos2::ZERO), c.point_at(0.5)));
        assert_eq!(c.flatten(10, 0.0).len(), 1);
    }

    #[test]
    fn test_empty_diagram_is_an_error() {
        let err = FlowDiagram::new(0, 0.0).err();
        assert_eq!(err.map(|e| e.phase), Some("flow"));
    }

    #[test]
    fn test_initial_layout_then_debounced_resize() {
        let mut d = FlowDiagram::new(5, 0.0).expect("five steps");
        assert!(!d.tick(0.05));
        assert!(d.tick(0.1));
        assert!(!d.tick(0.2));

        d.on_resize(1.0);
        d.on_resize(1.1);
        assert!(!d.tick(1.25));
        assert!(d.tick(1.3));
    }

    #[test]
    fn test_lines_animate_once_visible() {
        let mut d = FlowDiagram::new(5, 0.0).expect("five steps");
        d.set_intersection(0.1, 1.0);
        assert!(!d.is_animating());
        d.set_intersection(0.25, 2.0);
        assert!(d.is_animating());
        assert!((d.progress(2.75) - 0.5).abs() < 1e-5);
        assert!((d.progress(10.0) - 1.0).abs() < 1e-5);
        // Scrolling away does not undo the animation.
        d.set_intersection(0.0, 3.0);
        assert!(d.is_animating());
    }

    #[test]
    fn test_restart_replays_after_delay() {
        let mut d = FlowDiagram::new(5, 0.0).expect("five steps");
        d.set_intersection(1.0, 0.0);
        d.restart(5.0);
        assert!(!d.is_animating());
        assert_eq!(d.progress(5.01), 0.0);
        d.tick(5.05);
        assert!(d.is_animating());
        assert_eq!(d.progress(5.05), 0.0);
    }
}
