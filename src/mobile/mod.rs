//! Touch and keyboard input for the sliders.

pub mod touch;
