//! egui Painter-backed drawing surface.
//!
//! egui rebuilds its shape list every frame, so "clear" only paints the
//! optional background; stale shapes never survive a repaint.

use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke};

use super::{DrawSurface, SurfaceSize};
use crate::config::Glow;

pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Option<Color32>,
}

impl<'a> PainterSurface<'a> {
    /// Surface covering `rect` of `painter`'s layer.
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            background: None,
        }
    }

    pub fn with_background(mut self, color: Color32) -> Self {
        self.background = Some(color);
        self
    }

    /// Logical size plus the context's pixel density.
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.rect.width(),
            self.rect.height(),
            self.painter.ctx().pixels_per_point(),
        )
    }

    fn to_screen(&self, p: Pos2) -> Pos2 {
        self.rect.min + p.to_vec2()
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self) {
        if let Some(bg) = self.background {
            self.painter.rect_filled(self.rect, Rounding::ZERO, bg);
        }
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }

    fn disc(&mut self, center: Pos2, radius: f32, color: Color32, glow: Option<Glow>) {
        let c = self.to_screen(center);
        if let Some(glow) = glow {
            // Two falloff rings approximate a blurred shadow.
            let faint = glow.color.gamma_multiply(0.5);
            self.painter.circle_filled(c, radius + glow.blur, faint);
            self.painter.circle_filled(c, radius + glow.blur * 0.5, glow.color);
        }
        self.painter.circle_filled(c, radius, color);
    }
}
