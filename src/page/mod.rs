//! Landing page components. Each one is a small state machine driven by
//! input events and the current time; drawing happens in the host.

pub mod content;
pub mod dialog;
pub mod flow;
pub mod slider;
pub mod tilt;
pub mod typewriter;
