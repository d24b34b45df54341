//! Per-frame camera state, rotation and perspective projection.

use std::f32::consts::TAU;

use egui::Pos2;

use super::{Point3D, Scene};
use crate::config::MeshConfig;

/// Time-derived transform inputs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation about the vertical axis, radians in [0, 2π)
    pub angle_y: f32,
    /// Rotation about the horizontal axis, radians in [0, 2π)
    pub angle_x: f32,
    /// Radius multiplier in [pulse_min, pulse_max]
    pub pulse: f32,
    /// Wobble driver in [0, 1]
    pub movement: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            angle_y: 0.0,
            angle_x: 0.0,
            pulse: 1.0,
            movement: 0.0,
        }
    }
}

impl Camera {
    /// Advance rotations by `dt` seconds and resample the periodic terms at
    /// absolute time `t`.
    pub fn advance(&mut self, config: &MeshConfig, dt: f32, t: f64) {
        // Wrapped so the per-frame increment never drops below f32 resolution.
        self.angle_y = (self.angle_y + TAU / config.period_y * dt).rem_euclid(TAU);
        self.angle_x = (self.angle_x + TAU / config.period_x * dt).rem_euclid(TAU);

        let pulse_wave = unit_wave(t, config.pulse_period);
        self.pulse = config.pulse_min + pulse_wave * (config.pulse_max - config.pulse_min);
        self.movement = unit_wave(t, config.movement_period);
    }
}

/// `(sin(t·π / period) + 1) / 2`, in [0, 1].
fn unit_wave(t: f64, period: f32) -> f32 {
    ((t / period as f64 * std::f64::consts::PI).sin() as f32 + 1.0) * 0.5
}

/// Screen placement of the projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub center: Pos2,
    /// Cloud radius in pixels before pulsation, `min(w, h) / 2`
    pub base_radius: f32,
    pub focal_length: f32,
    pub depth_offset: f32,
}

impl Projection {
    pub fn new(width: f32, height: f32, config: &MeshConfig) -> Self {
        Self {
            center: Pos2::new(width * 0.5, height * 0.5),
            base_radius: width.min(height) * 0.5,
            focal_length: config.focal_length,
            depth_offset: config.depth_offset,
        }
    }

    /// Perspective divide of a camera-space point (pixels).
    pub fn project(&self, x: f32, y: f32, z: f32) -> Projected {
        let scale = self.focal_length / (self.focal_length + z + self.depth_offset);
        Projected {
            pos: Pos2::new(x * scale + self.center.x, y * scale + self.center.y),
            scale,
        }
    }
}

/// Node position on the surface and its depth scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    pub scale: f32,
}

/// Rotate about Y by `angle_y`, then about X by `angle_x`.
pub fn rotate(x: f32, y: f32, z: f32, angle_y: f32, angle_x: f32) -> [f32; 3] {
    let (sin_y, cos_y) = angle_y.sin_cos();
    let (sin_x, cos_x) = angle_x.sin_cos();

    let rx = x * cos_y + z * sin_y;
    let rz = -x * sin_y + z * cos_y;

    let fy = y * cos_x - rz * sin_x;
    let fz = y * sin_x + rz * cos_x;
    [rx, fy, fz]
}

/// Full per-node transform: wobble, rotate, pulsate, project.
pub fn transform_point(
    p: &Point3D,
    camera: &Camera,
    projection: &Projection,
    wobble: f32,
) -> Projected {
    let k = 1.0 + wobble * (p.phase + camera.movement * TAU).sin();
    let [x, y, z] = rotate(p.x * k, p.y * k, p.z * k, camera.angle_y, camera.angle_x);
    let radius = projection.base_radius * camera.pulse;
    projection.project(x * radius, y * radius, z * radius)
}

/// Project every node of `scene`, in node order.
pub fn project_scene(
    scene: &Scene,
    camera: &Camera,
    projection: &Projection,
    wobble: f32,
) -> Vec<Projected> {
    scene
        .nodes
        .iter()
        .map(|n| transform_point(&n.base, camera, projection, wobble))
        .collect()
}
