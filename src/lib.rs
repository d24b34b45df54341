pub mod config;
pub mod error;
pub mod viewport;
pub mod schedule;

// Neural mesh: scene generation, projection, drawing
pub mod mesh;
pub mod render;

// Touch / keyboard input for the sliders
pub mod mobile;

// Page components: dialog, flow diagram, tilt, typewriter, sliders
pub mod page;

pub use error::LandingError;
