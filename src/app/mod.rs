//! `LandingApp` — the egui host for the landing page.
//!
//! Owns one instance of every page effect and drives them from egui's
//! frame loop: input is routed first, timers are ticked, then each section
//! is laid out and painted. Section drawing lives in `sections`.

mod sections;

use std::time::Duration;

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use landing_fx::mobile::touch::{key_command, SwipeTracker};
use landing_fx::page::content::{FLOW_STEPS, SYSTEM_DIALOG_TEXT};
use landing_fx::page::dialog::DownloadDialog;
use landing_fx::page::flow::FlowDiagram;
use landing_fx::page::slider::{QuestSlider, ScreenshotSlider};
use landing_fx::page::tilt::TiltEffect;
use landing_fx::page::typewriter::Typewriter;
use landing_fx::render::animator::MeshAnimator;
use landing_fx::schedule::RepaintScheduler;
use landing_fx::viewport::Viewport;

pub struct LandingApp {
    viewport: Viewport,
    dialog: DownloadDialog,
    flow: Option<FlowDiagram>,
    quests: Option<QuestSlider>,
    shots: Option<ScreenshotSlider>,
    typewriter: Typewriter,
    tilt: TiltEffect<RepaintScheduler>,
    /// Created on the first frame, once the canvas has a size.
    mesh: Option<MeshAnimator<RepaintScheduler>>,
    rng: StdRng,
    quest_swipe: SwipeTracker,
    shot_swipe: SwipeTracker,
    // Slider areas from the previous frame, for touch routing
    quest_rect: Option<egui::Rect>,
    shot_rect: Option<egui::Rect>,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let ctx = cc.egui_ctx.clone();
        let now = ctx.input(|i| i.time);
        let screen = ctx.screen_rect();

        let flow = FlowDiagram::new(FLOW_STEPS, now)
            .map_err(|e| log::warn!("{}", e))
            .ok();
        let quests = flow.as_ref().and_then(|flow| {
            QuestSlider::builtin(flow)
                .map_err(|e| log::warn!("{}", e))
                .ok()
        });
        let shots = ScreenshotSlider::builtin()
            .map_err(|e| log::warn!("{}", e))
            .ok();

        log::info!(
            "landing page mounted at {:.0}x{:.0}",
            screen.width(),
            screen.height()
        );

        Self {
            viewport: Viewport::new(screen.width(), screen.height()),
            dialog: DownloadDialog::new(),
            flow,
            quests,
            shots,
            typewriter: Typewriter::new(SYSTEM_DIALOG_TEXT),
            // Native windows are driven by a mouse; touch input only feeds
            // the sliders.
            tilt: TiltEffect::new(true, egui::Rect::ZERO, RepaintScheduler::new(ctx)),
            mesh: None,
            rng: StdRng::from_entropy(),
            quest_swipe: SwipeTracker::new(),
            shot_swipe: SwipeTracker::new(),
            quest_rect: None,
            shot_rect: None,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, now: f64) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let (Some(cmd), Some(quests)) = (key_command(key), self.quests.as_mut()) {
                        quests.navigate(cmd, now);
                    }
                }
                egui::Event::Touch { id, phase, pos, .. } => {
                    self.route_touch(id.0, phase, pos, now);
                }
                _ => {}
            }
        }
    }

    fn route_touch(&mut self, id: u64, phase: egui::TouchPhase, pos: egui::Pos2, now: f64) {
        match phase {
            egui::TouchPhase::Start => {
                if self.quest_rect.is_some_and(|r| r.contains(pos)) {
                    self.quest_swipe.touch_start(pos.x, id);
                }
                if self.shot_rect.is_some_and(|r| r.contains(pos)) {
                    self.shot_swipe.touch_start(pos.x, id);
                }
            }
            egui::TouchPhase::End => {
                if let (Some(dir), Some(quests)) =
                    (self.quest_swipe.touch_end(pos.x, id), self.quests.as_mut())
                {
                    quests.navigate(dir.into(), now);
                }
                if let (Some(dir), Some(shots)) =
                    (self.shot_swipe.touch_end(pos.x, id), self.shots.as_mut())
                {
                    shots.navigate(dir.into(), now);
                }
            }
            egui::TouchPhase::Cancel => {
                self.quest_swipe.cancel();
                self.shot_swipe.cancel();
            }
            egui::TouchPhase::Move => {}
        }
    }

    fn tick_timers(&mut self, now: f64) {
        if let (Some(quests), Some(flow)) = (self.quests.as_mut(), self.flow.as_mut()) {
            quests.tick(now, flow);
        }
        if let Some(shots) = self.shots.as_mut() {
            shots.tick(now);
        }
        self.typewriter.tick(now, &mut self.rng);
    }

    /// Seconds until the earliest pending timer.
    fn next_wakeup(&self, now: f64) -> Option<f64> {
        [
            self.flow.as_ref().and_then(|f| f.next_wakeup(now)),
            self.quests.as_ref().and_then(|q| q.next_wakeup(now)),
            self.shots.as_ref().and_then(|s| s.next_wakeup(now)),
            self.typewriter.next_wakeup(now),
        ]
        .into_iter()
        .flatten()
        .min_by(|a, b| a.total_cmp(b))
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let screen = ctx.screen_rect();
        let viewport = Viewport::new(screen.width(), screen.height());
        if viewport != self.viewport {
            log::debug!("viewport resized to {:.0}x{:.0}", viewport.width, viewport.height);
            self.viewport = viewport;
            if let Some(flow) = self.flow.as_mut() {
                flow.on_resize(now);
            }
        }

        self.handle_input(ctx, now);
        self.tick_timers(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(sections::PAGE_BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let visible = ui.clip_rect();
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(1080.0);
                            self.hero(ui);
                            self.mechanics(ui, now, visible);
                            self.neural_mesh(ui, now, visible);
                            self.system_dialog(ui, now, visible);
                            self.screenshots(ui, now);
                            ui.add_space(64.0);
                        });
                    });
            });

        self.download_dialog(ctx);

        if let Some(wait) = self.next_wakeup(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }
    }
}
