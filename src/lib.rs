//! Snapping segment and polyline drawing overlay for Wayland compositors.
//!
//! The drawing session ([`input::InputState`]) is independent of the display
//! backend: it consumes pointer positions, clicks and key presses, and produces
//! a [`draw::RenderDescription`] that any [`draw::StrokeSurface`] can paint.

pub mod backend;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod ui;

pub use config::Config;
