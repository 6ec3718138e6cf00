use crate::draw::RenderDescription;
use crate::geometry::Segment;

use super::InputState;

impl InputState {
    /// Projects the session into what should be drawn this frame.
    ///
    /// Segments of every finalized polyline come first, then the open
    /// segments. The preview runs from the pending anchor to the pointer and
    /// is only present while anchored with a known pointer position. Reading
    /// never mutates the session, so this is safe to call on every refresh.
    pub fn render_description(&self) -> RenderDescription {
        let segments = self.snap_candidates().copied().collect();

        let preview = self
            .pending_anchor()
            .zip(self.pointer)
            .map(|(anchor, pointer)| Segment::new(anchor, pointer));

        RenderDescription {
            segments,
            preview,
            snap_marker: self.snap_target.map(|hit| hit.projection.point),
        }
    }
}
