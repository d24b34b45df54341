//! Pointer-driven parallax tilt for the phone mockup.
//!
//! While the pointer hovers the mockup, every frame converts the pointer's
//! offset from the mockup center into rotation angles. The angles are
//! normalized by the center's page coordinates, so the same offset tilts
//! more for a mockup near the top-left of the page.

use egui::{Pos2, Rect, Vec2};

use crate::config::{
    TILT_MAX_ROTATE_X, TILT_MAX_ROTATE_Y, TILT_SCALE_DESKTOP, TILT_SCALE_MOBILE, TILT_TRANSLATE_Z,
};
use crate::schedule::{FrameHandle, FrameScheduler};
use crate::viewport::Viewport;

/// CSS-style transform applied to the phone image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub translate_z: f32,
    /// Degrees
    pub rotate_y: f32,
    /// Degrees
    pub rotate_x: f32,
    pub scale: f32,
}

impl TiltTransform {
    pub const IDENTITY: Self = Self {
        translate_z: 0.0,
        rotate_y: 0.0,
        rotate_x: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// `transform` property value, as the browser would receive it.
    pub fn css(&self) -> String {
        if self.is_identity() {
            return "rotateY(0) rotateX(0) scale(1)".to_owned();
        }
        format!(
            "translateZ({}px) rotateY({}deg) rotateX({}deg) scale({})",
            self.translate_z, self.rotate_y, self.rotate_x, self.scale
        )
    }

    /// Corners of `rect` after the transform, seen through a perspective of
    /// `perspective` pixels. Order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn project_rect(&self, rect: Rect, perspective: f32) -> [Pos2; 4] {
        let c = rect.center();
        let (sy, cy) = self.rotate_y.to_radians().sin_cos();
        let (sx, cx) = self.rotate_x.to_radians().sin_cos();
        let corner = |p: Pos2| {
            let x = (p.x - c.x) * self.scale;
            let y = (p.y - c.y) * self.scale;
            // rotateX, then rotateY, then translateZ (right-to-left like CSS).
            let y1 = y * cx;
            let z1 = y * sx;
            let x2 = x * cy + z1 * sy;
            let z2 = -x * sy + z1 * cy;
            let z = z2 + self.translate_z;
            let k = perspective / (perspective - z).max(1.0);
            Pos2::new(c.x + x2 * k, c.y + y1 * k)
        };
        [
            corner(rect.left_top()),
            corner(rect.right_top()),
            corner(rect.right_bottom()),
            corner(rect.left_bottom()),
        ]
    }
}

pub struct TiltEffect<S: FrameScheduler> {
    enabled: bool,
    hovering: bool,
    center: Pos2,
    offset: Vec2,
    pending: Option<FrameHandle>,
    transform: TiltTransform,
    scheduler: S,
}

impl<S: FrameScheduler> TiltEffect<S> {
    /// The effect only reacts when the primary pointer is fine (a mouse).
    pub fn new(fine_pointer: bool, mockup: Rect, scheduler: S) -> Self {
        Self {
            enabled: fine_pointer,
            hovering: false,
            center: mockup.center(),
            offset: Vec2::ZERO,
            pending: None,
            transform: TiltTransform::IDENTITY,
            scheduler,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn transform(&self) -> TiltTransform {
        self.transform
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn pointer_enter(&mut self, pointer: Pos2, mockup: Rect) {
        if !self.enabled {
            return;
        }
        self.center = mockup.center();
        self.hovering = true;
        self.pointer_move(pointer);
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    pub fn pointer_move(&mut self, pointer: Pos2) {
        if !self.enabled {
            return;
        }
        self.offset = pointer - self.center;
    }

    pub fn pointer_leave(&mut self) {
        if !self.enabled {
            return;
        }
        self.hovering = false;
        self.transform = TiltTransform::IDENTITY;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Mockup moved or resized.
    pub fn on_resize(&mut self, mockup: Rect) {
        self.center = mockup.center();
    }

    /// Run frame callback `handle`. Returns true if a transform was applied.
    pub fn frame(&mut self, handle: FrameHandle, viewport: Viewport) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        if !self.hovering {
            return false;
        }

        self.transform = TiltTransform {
            translate_z: TILT_TRANSLATE_Z,
            rotate_y: ratio(self.offset.x, self.center.x) * TILT_MAX_ROTATE_Y,
            rotate_x: -ratio(self.offset.y, self.center.y) * TILT_MAX_ROTATE_X,
            scale: if viewport.is_desktop() {
                TILT_SCALE_DESKTOP
            } else {
                TILT_SCALE_MOBILE
            },
        };
        self.pending = Some(self.scheduler.request_frame());
        true
    }
}

fn ratio(offset: f32, center: f32) -> f32 {
    if center.abs() > f32::EPSILON {
        offset / center
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use egui::{pos2, vec2};

    fn mockup() -> Rect {
        // Center at (400, 300).
        Rect::from_center_size(pos2(400.0, 300.0), vec2(200.0, 400.0))
    }

    fn run(t: &mut TiltEffect<ManualScheduler>, viewport: Viewport) {
        for h in t.scheduler_mut().take_due() {
            t.frame(h, viewport);
        }
    }

    #[test]
    fn test_coarse_pointer_disables_effect() {
        let mut t = TiltEffect::new(false, mockup(), ManualScheduler::new());
        t.pointer_enter(pos2(450.0, 300.0), mockup());
        assert!(!t.is_hovering());
        assert_eq!(t.scheduler().pending(), 0);
    }

    #[test]
    fn test_angles_from_pointer_offset() {
        let mut t = TiltEffect::new(true, mockup(), ManualScheduler::new());
        t.pointer_enter(pos2(480.0, 240.0), mockup());
        run(&mut t, Viewport::new(1280.0, 800.0));

        let tr = t.transform();
        assert!((tr.rotate_y - 80.0 / 400.0 * 15.0).abs() < 1e-5);
        assert!((tr.rotate_x - 60.0 / 300.0 * 10.0).abs() < 1e-5);
        assert!((tr.scale - 1.08).abs() < 1e-6);
        assert!((tr.translate_z - 50.0).abs() < 1e-6);
        assert_eq!(t.scheduler().pending(), 1);
    }

    #[test]
    fn test_mobile_scale() {
        let mut t = TiltEffect::new(true, mockup(), ManualScheduler::new());
        t.pointer_enter(pos2(400.0, 300.0), mockup());
        run(&mut t, Viewport::new(600.0, 800.0));
        assert!((t.transform().scale - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_leave_resets_and_cancels() {
        let mut t = TiltEffect::new(true, mockup(), ManualScheduler::new());
        t.pointer_enter(pos2(480.0, 240.0), mockup());
        run(&mut t, Viewport::new(1280.0, 800.0));
        t.pointer_leave();
        assert!(t.transform().is_identity());
        assert_eq!(t.transform().css(), "rotateY(0) rotateX(0) scale(1)");
        assert_eq!(t.scheduler().pending(), 0);
        assert!(t.pending_frame().is_none());
    }

    #[test]
    fn test_reenter_does_not_stack_frames() {
        let mut t = TiltEffect::new(true, mockup(), ManualScheduler::new());
        t.pointer_enter(pos2(480.0, 240.0), mockup());
        t.pointer_enter(pos2(420.0, 240.0), mockup());
        assert_eq!(t.scheduler().pending(), 1);
    }

    #[test]
    fn test_css_output() {
        let tr = TiltTransform {
            translate_z: 50.0,
            rotate_y: 3.0,
            rotate_x: -2.0,
            scale: 1.08,
        };
        assert_eq!(
            tr.css(),
            "translateZ(50px) rotateY(3deg) rotateX(-2deg) scale(1.08)"
        );
    }

    #[test]
    fn test_identity_projection_keeps_rect() {
        let r = mockup();
        let quad = TiltTransform::IDENTITY.project_rect(r, 1000.0);
        assert!((quad[0] - r.left_top()).length() < 1e-3);
        assert!((quad[2] - r.right_bottom()).length() < 1e-3);
    }

    #[test]
    fn test_resize_moves_center() {
        let mut t = TiltEffect::new(true, mockup(), ManualScheduler::new());
        t.on_resize(Rect::from_center_size(pos2(100.0, 50.0), vec2(10.0, 10.0)));
        assert_eq!(t.center(), pos2(100.0, 50.0));
    }
}
