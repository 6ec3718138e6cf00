//! Polyline container for finalized segment chains.

use crate::geometry::Segment;

/// An ordered chain of committed segments, finalized by a reset.
///
/// Segments keep the order in which they were drawn. Consecutive segments
/// do not have to share endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    segments: Vec<Segment>,
}

impl Polyline {
    /// Takes ownership of `segments` as a finalized chain.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
