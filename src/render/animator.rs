//! Neural mesh animator.
//!
//! Owns one generated [`Scene`] and drives it through the frame scheduler
//! while its surface is on screen:
//! - Idle: not visible, no frame pending
//! - Animating: visible, exactly one frame pending at a time
//!
//! Entering Animating resets the time baseline so the first frame after a
//! long pause does not jump. Leaving cancels the pending frame.

use rand::Rng;

use crate::config::MeshConfig;
use crate::mesh::transform::{project_scene, Camera, Projected, Projection};
use crate::mesh::Scene;
use crate::render::{draw_mesh, DrawSurface, SurfaceSize};
use crate::schedule::{FrameHandle, FrameScheduler};
use crate::viewport::{VisibilityChange, VisibilityObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Animating,
}

pub struct MeshAnimator<S: FrameScheduler> {
    config: MeshConfig,
    scene: Scene,
    camera: Camera,
    projection: Projection,
    size: SurfaceSize,
    scheduler: S,
    pending: Option<FrameHandle>,
    visible: bool,
    observer: VisibilityObserver,
    last_time: f64,
    /// Last computed frame, redrawn when the host repaints without a tick
    projected: Vec<Projected>,
}

impl<S: FrameScheduler> MeshAnimator<S> {
    /// Build the scene for a viewport of `viewport_width` and size the
    /// projection to `size`.
    pub fn new<R: Rng + ?Sized>(
        config: MeshConfig,
        viewport_width: f32,
        size: SurfaceSize,
        scheduler: S,
        rng: &mut R,
    ) -> Self {
        let count = config.node_count(viewport_width);
        let scene = Scene::generate(count, config.neighbors, rng);
        let projection = Projection::new(size.width, size.height, &config);
        let observer = VisibilityObserver::new(config.visibility_threshold);
        Self {
            config,
            scene,
            camera: Camera::default(),
            projection,
            size,
            scheduler,
            pending: None,
            visible: false,
            observer,
            last_time: 0.0,
            projected: Vec::new(),
        }
    }

    /// Like [`MeshAnimator::new`], but a missing surface disables the effect.
    pub fn attach<R: Rng + ?Sized>(
        config: MeshConfig,
        viewport_width: f32,
        surface: Option<SurfaceSize>,
        scheduler: S,
        rng: &mut R,
    ) -> Option<Self> {
        let Some(size) = surface else {
            log::debug!("neural mesh surface missing, effect disabled");
            return None;
        };
        Some(Self::new(config, viewport_width, size, scheduler, rng))
    }

    pub fn state(&self) -> AnimState {
        if self.visible && self.pending.is_some() {
            AnimState::Animating
        } else {
            AnimState::Idle
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
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

    /// Feed the surface's current intersection ratio.
    pub fn set_intersection(&mut self, ratio: f32, now: f64) {
        match self.observer.observe(ratio) {
            Some(VisibilityChange::Entered) => self.start(now),
            Some(VisibilityChange::Left) => self.stop(),
            None => {}
        }
    }

    /// Mark visible and schedule the first frame if none is pending.
    pub fn start(&mut self, now: f64) {
        self.visible = true;
        if self.pending.is_none() {
            self.last_time = now;
            self.pending = Some(self.scheduler.request_frame());
            log::debug!("neural mesh: idle -> animating");
        }
    }

    /// Mark hidden and cancel the pending frame.
    pub fn stop(&mut self) {
        self.visible = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            log::debug!("neural mesh: animating -> idle");
        }
    }

    /// Container changed size: recenter the projection. Scene data is kept.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.projection = Projection::new(size.width, size.height, &self.config);
        if !self.projected.is_empty() {
            self.projected =
                project_scene(&self.scene, &self.camera, &self.projection, self.config.wobble);
        }
        let [bw, bh] = size.backing();
        log::debug!(
            "neural mesh resized to {}x{} (backing {}x{})",
            size.width,
            size.height,
            bw,
            bh
        );
    }

    /// Run the frame callback `handle` at absolute time `time` (seconds).
    ///
    /// Returns false for stale or cancelled handles and when hidden; in
    /// those cases nothing is drawn and nothing is rescheduled.
    pub fn frame<D: DrawSurface + ?Sized>(
        &mut self,
        handle: FrameHandle,
        time: f64,
        surface: &mut D,
    ) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        if !self.visible {
            return false;
        }

        let dt = (time - self.last_time).max(0.0) as f32;
        self.last_time = time;
        self.camera.advance(&self.config, dt, time);
        self.projected =
            project_scene(&self.scene, &self.camera, &self.projection, self.config.wobble);
        draw_mesh(surface, &self.scene, &self.projected, &self.config);

        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Draw the last computed frame again without advancing time.
    pub fn redraw<D: DrawSurface + ?Sized>(&self, surface: &mut D) {
        if self.projected.is_empty() {
            return;
        }
        draw_mesh(surface, &self.scene, &self.projected, &self.config);
    }
}
