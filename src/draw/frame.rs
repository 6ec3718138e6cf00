//! Per-frame render description pulled from the drawing session.

use crate::geometry::{Point, Segment};

/// Everything the renderer needs to draw one frame.
///
/// Produced by [`InputState::render_description`](crate::input::InputState::render_description)
/// without mutating the session, so it is safe to build on every refresh tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderDescription {
    /// Segments of every committed polyline, followed by the open segments
    pub segments: Vec<Segment>,
    /// Rubber-band line from the pending anchor to the pointer
    pub preview: Option<Segment>,
    /// Pointer position when it is currently snapped onto a segment
    pub snap_marker: Option<Point>,
}

impl RenderDescription {
    /// Returns true when nothing would be stroked.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.preview.is_none() && self.snap_marker.is_none()
    }
}
