mod actions;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{
    ClickOutcome, DEFAULT_SNAP_THRESHOLD, DrawingState, InputState, ResetOutcome, SessionError,
    SnapHit,
};
