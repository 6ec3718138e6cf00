//! Rendering primitives and drawing data (Cairo-based).
//!
//! This module defines the drawable types of a session:
//! - [`Color`]: RGBA color representation with the named palette
//! - [`Polyline`]: a finalized chain of segments
//! - [`RenderDescription`]: everything drawn on one frame
//! - Rendering functions over the [`StrokeSurface`] primitives

pub mod color;
pub mod frame;
pub mod polyline;
pub mod render;

pub use color::Color;
pub use frame::RenderDescription;
pub use polyline::Polyline;
pub use render::{
    MarkerStyle, RenderStyle, StrokeStyle, StrokeSurface, render_description, render_segment,
};
