pub mod animator;
pub mod painter;

use egui::{Color32, Pos2};

use crate::config::{Glow, MeshConfig};
use crate::mesh::transform::Projected;
use crate::mesh::Scene;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Logical (CSS-style) width
    pub width: f32,
    /// Logical height
    pub height: f32,
    /// Device pixels per logical pixel
    pub pixels_per_point: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32, pixels_per_point: f32) -> Self {
        Self {
            width,
            height,
            pixels_per_point,
        }
    }

    /// Size of the backing store in device pixels.
    pub fn backing(&self) -> [u32; 2] {
        let ppp = if self.pixels_per_point > 0.0 {
            self.pixels_per_point
        } else {
            1.0
        };
        [
            (self.width * ppp).round().max(0.0) as u32,
            (self.height * ppp).round().max(0.0) as u32,
        ]
    }
}

/// 2D target the mesh is drawn onto. Coordinates are logical pixels
/// relative to the surface's top-left corner.
pub trait DrawSurface {
    fn clear(&mut self);
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn disc(&mut self, center: Pos2, radius: f32, color: Color32, glow: Option<Glow>);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Disc {
        center: Pos2,
        radius: f32,
        color: Color32,
        glow: Option<Glow>,
    },
}

/// Surface that keeps every call, for headless use.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Disc { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn disc(&mut self, center: Pos2, radius: f32, color: Color32, glow: Option<Glow>) {
        self.ops.push(DrawOp::Disc {
            center,
            radius,
            color,
            glow,
        });
    }
}

/// Clear the surface, then draw edges beneath nodes.
///
/// Edge width and node radius scale with projected depth so nearer parts
/// read heavier.
pub fn draw_mesh<S: DrawSurface + ?Sized>(
    surface: &mut S,
    scene: &Scene,
    projected: &[Projected],
    config: &MeshConfig,
) {
    surface.clear();

    for edge in &scene.edges {
        let (Some(p1), Some(p2)) = (projected.get(edge.a), projected.get(edge.b)) else {
            continue;
        };
        let width = config.edge_width * (p1.scale + p2.scale) * 0.5;
        surface.line(p1.pos, p2.pos, width, config.edge_color);
    }

    for p in projected {
        surface.disc(
            p.pos,
            config.node_radius * p.scale,
            config.node_color,
            Some(config.glow),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Edge, Node, Point3D};

    fn scene_of(n: usize, edges: Vec<Edge>) -> Scene {
        let base = Point3D { x: 0.0, y: 0.0, z: 0.0, phase: 0.0 };
        Scene {
            nodes: vec![Node { base }; n],
            edges,
        }
    }

    fn at(x: f32, y: f32, scale: f32) -> Projected {
        Projected {
            pos: Pos2::new(x, y),
            scale,
        }
    }

    #[test]
    fn test_clears_then_edges_then_nodes() {
        let scene = scene_of(3, vec![Edge { a: 0, b: 1 }, Edge { a: 1, b: 2 }]);
        let proj = [at(0.0, 0.0, 1.0), at(10.0, 0.0, 0.5), at(20.0, 0.0, 1.5)];
        let cfg = MeshConfig::default();
        let mut surface = RecordingSurface::new();
        draw_mesh(&mut surface, &scene, &proj, &cfg);

        assert_eq!(surface.ops.len(), 1 + 2 + 3);
        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert!(matches!(surface.ops[1], DrawOp::Line { .. }));
        assert!(matches!(surface.ops[2], DrawOp::Line { .. }));
        assert!(surface.ops[3..].iter().all(|op| matches!(op, DrawOp::Disc { .. })));
    }

    #[test]
    fn test_widths_and_radii_follow_scale() {
        let scene = scene_of(2, vec![Edge { a: 0, b: 1 }]);
        let proj = [at(0.0, 0.0, 1.0), at(5.0, 5.0, 0.5)];
        let cfg = MeshConfig::default();
        let mut surface = RecordingSurface::new();
        draw_mesh(&mut surface, &scene, &proj, &cfg);

        match surface.lines().next() {
            Some(DrawOp::Line { width, .. }) => assert!((width - 1.5 * 0.75).abs() < 1e-6),
            other => panic!("expected a line, got {:?}", other),
        }
        let radii: Vec<f32> = surface
            .discs()
            .map(|op| match op {
                DrawOp::Disc { radius, glow, .. } => {
                    assert!(glow.is_some());
                    *radius
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, vec![5.0, 2.5]);
    }

    #[test]
    fn test_redraw_replaces_previous_frame() {
        let scene = scene_of(1, vec![]);
        let cfg = MeshConfig::default();
        let mut surface = RecordingSurface::new();
        draw_mesh(&mut surface, &scene, &[at(1.0, 1.0, 1.0)], &cfg);
        draw_mesh(&mut surface, &scene, &[at(2.0, 2.0, 1.0)], &cfg);
        assert_eq!(surface.discs().count(), 1);
    }

    #[test]
    fn test_backing_size_uses_pixel_density() {
        let size = SurfaceSize::new(300.0, 150.0, 2.0);
        assert_eq!(size.backing(), [600, 300]);
        assert_eq!(SurfaceSize::new(300.0, 150.0, 0.0).backing(), [300, 150]);
    }
}
