//! Tunables for the landing page effects.
//!
//! Everything is plain data with `Default` impls; there is no config file.
//! Times are in seconds, distances in logical pixels unless noted.

use egui::Color32;

/// Viewports at least this wide use the desktop layout.
pub const DESKTOP_BREAKPOINT: f32 = 768.0;

/// Visibility ratio at which the mesh canvas starts animating.
pub const MESH_VISIBILITY_THRESHOLD: f32 = 0.1;
/// Visibility ratio at which the mechanics flow lines draw in.
pub const FLOW_VISIBILITY_THRESHOLD: f32 = 0.2;
/// Visibility ratio at which the system dialog starts typing.
pub const TYPEWRITER_VISIBILITY_THRESHOLD: f32 = 0.2;

/// First flow layout happens this long after mount.
pub const FLOW_INITIAL_LAYOUT_DELAY: f64 = 0.1;
/// Flow layout is recomputed this long after the last resize.
pub const FLOW_RESIZE_DEBOUNCE: f64 = 0.2;
/// Gap between dropping and re-adding the line animation.
pub const FLOW_RESTART_DELAY: f64 = 0.05;
/// Duration of the dashed line draw-in.
pub const FLOW_DRAW_DURATION: f64 = 1.5;
/// Control point offset as a fraction of the start/end distance.
pub const FLOW_LOOPINESS: f32 = 0.4;

/// Horizontal travel needed before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;
/// Time slider content stays faded out before swapping.
pub const SLIDER_FADE_DURATION: f64 = 0.3;

/// Typing begins this long after the dialog becomes visible.
pub const TYPEWRITER_START_DELAY: f64 = 0.5;
/// Upper bound (exclusive) of the random per-character delay.
pub const TYPEWRITER_MAX_CHAR_DELAY: f64 = 0.015;

/// Maximum tilt around the vertical axis, in degrees.
pub const TILT_MAX_ROTATE_Y: f32 = 15.0;
/// Maximum tilt around the horizontal axis, in degrees.
pub const TILT_MAX_ROTATE_X: f32 = 10.0;
pub const TILT_TRANSLATE_Z: f32 = 50.0;
pub const TILT_SCALE_DESKTOP: f32 = 1.08;
pub const TILT_SCALE_MOBILE: f32 = 1.05;

/// Soft shadow drawn around each mesh node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color32,
    pub blur: f32,
}

/// Parameters of the neural mesh animation.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfig {
    /// Node count below the desktop breakpoint
    pub narrow_nodes: usize,
    /// Node count at or above the desktop breakpoint
    pub wide_nodes: usize,
    pub breakpoint: f32,
    /// Nearest neighbors considered per node
    pub neighbors: usize,
    /// Seconds per full revolution around the vertical axis
    pub period_y: f32,
    /// Seconds per full revolution around the horizontal axis
    pub period_x: f32,
    pub pulse_period: f32,
    pub pulse_min: f32,
    pub pulse_max: f32,
    pub movement_period: f32,
    pub wobble: f32,
    pub focal_length: f32,
    pub depth_offset: f32,
    pub node_radius: f32,
    pub edge_width: f32,
    pub node_color: Color32,
    pub edge_color: Color32,
    pub glow: Glow,
    pub visibility_threshold: f32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            narrow_nodes: 30,
            wide_nodes: 50,
            breakpoint: DESKTOP_BREAKPOINT,
            neighbors: 3,
            period_y: 20.0,
            period_x: 25.0,
            pulse_period: 1.5,
            pulse_min: 0.9,
            pulse_max: 1.1,
            movement_period: 5.0,
            wobble: 0.1,
            focal_length: 300.0,
            depth_offset: 100.0,
            node_radius: 5.0,
            edge_width: 1.5,
            node_color: Color32::from_rgb(0x21, 0x21, 0x21),
            edge_color: Color32::from_rgb(0x21, 0x21, 0x21),
            glow: Glow {
                color: Color32::from_rgba_unmultiplied(33, 33, 33, 77),
                blur: 5.0,
            },
            visibility_threshold: MESH_VISIBILITY_THRESHOLD,
        }
    }
}

impl MeshConfig {
    /// Node count for a viewport of the given width.
    pub fn node_count(&self, viewport_width: f32) -> usize {
        if viewport_width < self.breakpoint {
            self.narrow_nodes
        } else {
            self.wide_nodes
        }
    }

    pub fn with_node_counts(mut self, narrow: usize, wide: usize) -> Self {
        self.narrow_nodes = narrow;
        self.wide_nodes = wide;
        self
    }

    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    pub fn with_focal_length(mut self, focal_length: f32, depth_offset: f32) -> Self {
        self.focal_length = focal_length;
        self.depth_offset = depth_offset;
        self
    }
}
