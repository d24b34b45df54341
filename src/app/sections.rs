//! Page sections, top to bottom.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{
    self, vec2, Align, Align2, Color32, FontId, Layout, Pos2, Rect, RichText, Sense, Shape,
    Stroke, Vec2,
};

use landing_fx::config::MeshConfig;
use landing_fx::mobile::touch::SlideCommand;
use landing_fx::page::content::{ScreenshotMedia, FLOW_STEPS};
use landing_fx::page::dialog::DialogClick;
use landing_fx::render::animator::MeshAnimator;
use landing_fx::render::painter::PainterSurface;
use landing_fx::render::{DrawSurface, SurfaceSize};
use landing_fx::schedule::RepaintScheduler;
use landing_fx::viewport::intersection_ratio;

use super::LandingApp;

pub(super) const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);
const INK: Color32 = Color32::from_rgb(0x21, 0x21, 0x21);
const MUTED: Color32 = Color32::from_rgb(0x75, 0x75, 0x75);
const CARD: Color32 = Color32::WHITE;
const BORDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// CSS perspective of the hero container, in points.
const MOCKUP_PERSPECTIVE: f32 = 1000.0;
const STEP_BOX: Vec2 = Vec2::new(190.0, 64.0);
const CURVE_SEGMENTS: usize = 32;

impl LandingApp {
    pub(super) fn hero(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_max_width(420.0);
                ui.label(
                    RichText::new("Quest your way out of doom-scrolling")
                        .size(34.0)
                        .strong()
                        .color(INK),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "QP keeps distracting apps locked until you finish real-world quests.",
                    )
                    .size(16.0)
                    .color(MUTED),
                );
                ui.add_space(16.0);
                if ui.button(RichText::new("Download").size(18.0)).clicked() {
                    self.dialog.open();
                }
            });
            ui.add_space(48.0);
            self.phone_mockup(ui);
        });
    }

    fn phone_mockup(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(vec2(220.0, 440.0), Sense::hover());
        if self.tilt.center() != rect.center() {
            self.tilt.on_resize(rect);
        }

        match response.hover_pos() {
            Some(pos) if self.tilt.is_hovering() => self.tilt.pointer_move(pos),
            Some(pos) => self.tilt.pointer_enter(pos, rect),
            None if self.tilt.is_hovering() => self.tilt.pointer_leave(),
            None => {}
        }
        for handle in self.tilt.scheduler_mut().take_due() {
            self.tilt.frame(handle, self.viewport);
        }

        let transform = self.tilt.transform();
        let painter = ui.painter_at(rect.expand(48.0));
        let body = transform.project_rect(rect, MOCKUP_PERSPECTIVE);
        painter.add(Shape::convex_polygon(body.to_vec(), INK, Stroke::NONE));
        let screen = transform.project_rect(rect.shrink(10.0), MOCKUP_PERSPECTIVE);
        painter.add(Shape::convex_polygon(
            screen.to_vec(),
            PAGE_BACKGROUND,
            Stroke::NONE,
        ));
    }

    pub(super) fn mechanics(&mut self, ui: &mut egui::Ui, now: f64, visible: Rect) {
        section_heading(ui, "How it works");

        let (title, steps, opacity) = match &self.quests {
            Some(q) => (q.shown().title, q.shown().steps, q.opacity()),
            None => ("", [""; FLOW_STEPS], 1.0),
        };

        let mut cmd = None;
        let nav = ui
            .horizontal(|ui| {
                if ui.button("‹").clicked() {
                    cmd = Some(SlideCommand::Prev);
                }
                ui.label(
                    RichText::new(title)
                        .size(22.0)
                        .strong()
                        .color(INK.gamma_multiply(opacity)),
                );
                if ui.button("›").clicked() {
                    cmd = Some(SlideCommand::Next);
                }
            })
            .response
            .rect;
        if let (Some(cmd), Some(quests)) = (cmd, self.quests.as_mut()) {
            quests.navigate(cmd, now);
        }

        let desktop = self.viewport.is_desktop();
        let height = if desktop {
            380.0
        } else {
            (STEP_BOX.y + 40.0) * FLOW_STEPS as f32
        };
        let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        self.quest_rect = Some(nav.union(rect));
        let boxes = step_boxes(rect, FLOW_STEPS, desktop);
        let painter = ui.painter_at(rect);

        if let Some(flow) = self.flow.as_mut() {
            flow.set_intersection(intersection_ratio(rect, visible), now);
            if flow.tick(now) {
                let centers: Vec<Pos2> = boxes
                    .iter()
                    .map(|b| (b.center() - rect.min).to_pos2())
                    .collect();
                flow.layout(&centers, desktop);
            }

            let progress = flow.progress(now);
            if progress > 0.0 {
                let stroke = Stroke::new(flow.style.width, flow.style.color);
                for curve in flow.curves() {
                    let points: Vec<Pos2> = curve
                        .flatten(CURVE_SEGMENTS, progress)
                        .into_iter()
                        .map(|p| p + rect.min.to_vec2())
                        .collect();
                    painter.extend(Shape::dashed_line(
                        &points,
                        stroke,
                        flow.style.dash,
                        flow.style.gap,
                    ));
                }
                if progress < 1.0 {
                    ui.ctx().request_repaint();
                }
            }
        }

        for (b, text) in boxes.iter().zip(steps.iter()) {
            painter.rect(*b, 12.0, CARD, Stroke::new(1.0, BORDER));
            let galley = painter.layout(
                (*text).to_owned(),
                FontId::proportional(14.0),
                INK.gamma_multiply(opacity),
                b.width() - 16.0,
            );
            let pos = b.center() - galley.size() * 0.5;
            painter.galley(pos, galley, INK);
        }
    }

    pub(super) fn neural_mesh(&mut self, ui: &mut egui::Ui, now: f64, visible: Rect) {
        section_heading(ui, "The System learns you");

        let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 360.0), Sense::hover());
        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface::new(&painter, rect).with_background(PAGE_BACKGROUND);
        let size = surface.size();

        if self.mesh.is_none() {
            let usable = (size.width > 0.0 && size.height > 0.0).then_some(size);
            self.mesh = MeshAnimator::attach(
                MeshConfig::default(),
                self.viewport.width,
                usable,
                RepaintScheduler::new(ui.ctx().clone()),
                &mut self.rng,
            );
        }
        let Some(mesh) = self.mesh.as_mut() else {
            return;
        };
        if mesh.size() != size {
            mesh.resize(size);
        }
        mesh.set_intersection(intersection_ratio(rect, visible), now);

        let mut drew = false;
        for handle in mesh.scheduler_mut().take_due() {
            drew |= mesh.frame(handle, now, &mut surface);
        }
        if !drew {
            surface.clear();
            mesh.redraw(&mut surface);
        }
    }

    pub(super) fn system_dialog(&mut self, ui: &mut egui::Ui, now: f64, visible: Rect) {
        section_heading(ui, "Meet The System");

        let response = egui::Frame::group(ui.style())
            .fill(CARD)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_min_height(200.0);
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.label(
                        RichText::new(self.typewriter.output())
                            .monospace()
                            .size(15.0)
                            .color(INK),
                    );
                });
            })
            .response;
        self.typewriter
            .set_intersection(intersection_ratio(response.rect, visible), now);
    }

    pub(super) fn screenshots(&mut self, ui: &mut egui::Ui, now: f64) {
        section_heading(ui, "Screenshots");

        let Some(shots) = self.shots.as_mut() else {
            return;
        };
        let shot = shots.shown().clone();
        let opacity = shots.opacity();

        let mut cmd = None;
        let area = ui
            .horizontal(|ui| {
                if ui.button("‹").clicked() {
                    cmd = Some(SlideCommand::Prev);
                }
                ui.vertical(|ui| {
                    ui.set_max_width(300.0);
                    ui.label(
                        RichText::new(shot.title)
                            .size(20.0)
                            .strong()
                            .color(INK.gamma_multiply(opacity)),
                    );
                    let (frame, _) = ui.allocate_exact_size(vec2(260.0, 460.0), Sense::hover());
                    let painter = ui.painter_at(frame);
                    painter.rect(
                        frame,
                        16.0,
                        BORDER.gamma_multiply(opacity),
                        Stroke::new(1.0, MUTED.gamma_multiply(opacity)),
                    );
                    let label = match &shot.media {
                        ScreenshotMedia::Image { path } => format!("[image] {path}"),
                        ScreenshotMedia::Video { url, .. } => format!("[video] {url}"),
                    };
                    painter.text(
                        frame.center(),
                        Align2::CENTER_CENTER,
                        label,
                        FontId::proportional(13.0),
                        MUTED.gamma_multiply(opacity),
                    );
                    ui.label(RichText::new(shot.description).color(MUTED.gamma_multiply(opacity)));
                });
                if ui.button("›").clicked() {
                    cmd = Some(SlideCommand::Next);
                }
            })
            .response
            .rect;
        if let Some(cmd) = cmd {
            shots.navigate(cmd, now);
        }
        self.shot_rect = Some(area);
    }

    pub(super) fn download_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialog.is_open() {
            return;
        }
        let screen = ctx.screen_rect();

        let backdrop = egui::Area::new(egui::Id::new("download-backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(140));
                ui.allocate_rect(screen, Sense::click())
            })
            .inner;

        let mut close = false;
        egui::Area::new(egui::Id::new("download-dialog"))
            .order(egui::Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Download QP").size(20.0).strong());
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.button("✕").clicked() {
                                    close = true;
                                }
                            });
                        });
                        ui.add_space(8.0);
                        ui.label("Available on Android.");
                        ui.label(RichText::new("iOS is on the way.").color(MUTED));
                    });
            });

        if close {
            self.dialog.close();
        } else if backdrop.clicked() {
            self.dialog.click(DialogClick::Backdrop);
        }
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(72.0);
    ui.label(RichText::new(text).size(28.0).strong().color(INK));
    ui.add_space(16.0);
}

/// Step box rects inside `area`: a loop around an ellipse on desktop, a
/// single column otherwise.
fn step_boxes(area: Rect, count: usize, desktop: bool) -> Vec<Rect> {
    if desktop {
        let center = area.center();
        let rx = (area.width() * 0.5 - STEP_BOX.x * 0.5 - 8.0).max(0.0);
        let ry = (area.height() * 0.5 - STEP_BOX.y * 0.5 - 8.0).max(0.0);
        (0..count)
            .map(|i| {
                let a = TAU * i as f32 / count as f32 - FRAC_PI_2;
                let c = center + vec2(rx * a.cos(), ry * a.sin());
                Rect::from_center_size(c, STEP_BOX)
            })
            .collect()
    } else {
        let pitch = area.height() / count.max(1) as f32;
        (0..count)
            .map(|i| {
                let c = Pos2::new(area.center().x, area.top() + pitch * (i as f32 + 0.5));
                Rect::from_center_size(c, STEP_BOX)
            })
            .collect()
    }
}
