//! Drawing state machine and session state.

use crate::config::{Action, KeyBinding};
use crate::draw::Polyline;
use crate::geometry::{Point, Projection, Segment};
use crate::input::modifiers::Modifiers;
use std::collections::HashMap;
use thiserror::Error;

/// Snap distance used when the config does not override it.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 30.0;

/// Segment construction state.
///
/// Every segment takes two clicks: the first places the anchor, the second
/// commits a segment from the anchor to the pointer and returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No segment in progress
    Idle,
    /// First endpoint chosen, waiting for the second click
    Anchored {
        /// Start of the segment under construction
        anchor: Point,
    },
}

/// The committed segment the pointer was last snapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapHit {
    pub segment: Segment,
    pub projection: Projection,
}

/// Errors raised by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("click received before any pointer position was recorded")]
    NoPointerPosition,
}

/// Result of a successful click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// The click placed the anchor of a new segment
    Anchored(Point),
    /// The click completed this segment
    Committed(Segment),
}

/// Result of a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Nothing was open; no polyline was appended
    Empty,
    /// A polyline holding this many segments was appended
    Committed { segments: usize },
}

/// Main input state containing all drawing session state.
///
/// Holds the segment state machine, the open and finalized geometry, the
/// pointer position and the UI flags the backend consults before rendering.
/// Session geometry is only reachable through accessors so the state machine
/// invariants (at most one pending point, no partial segments) hold.
pub struct InputState {
    /// Segment construction state (pending anchor)
    pub(super) state: DrawingState,
    /// Committed segments not yet folded into a polyline
    pub(super) open_segments: Vec<Segment>,
    /// Finalized polylines in reset order
    pub(super) polylines: Vec<Polyline>,
    /// Pointer position after snapping; `None` until the first move
    pub(super) pointer: Option<Point>,
    /// Pointer position as reported by the backend
    pub(super) raw_pointer: Option<Point>,
    /// Segment the pointer is currently snapped onto
    pub(super) snap_target: Option<SnapHit>,
    /// Whether pointer snapping is active (toggled via keybinding)
    pub snap_enabled: bool,
    /// Maximum pointer-to-segment distance that still snaps
    pub snap_threshold: f64,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to exit the overlay
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Whether the status bar is currently visible
    pub show_status_bar: bool,
    /// Screen width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Screen height in pixels (set by backend after configuration)
    pub screen_height: u32,
    /// Keybinding action map for efficient lookup
    pub(super) action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates an empty drawing session.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_screen_dimensions`).
    ///
    /// # Arguments
    /// * `snap_enabled` - Whether snapping starts active
    /// * `snap_threshold` - Snap distance in surface units
    /// * `show_status_bar` - Whether the status bar starts visible
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        snap_enabled: bool,
        snap_threshold: f64,
        show_status_bar: bool,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            state: DrawingState::Idle,
            open_segments: Vec::new(),
            polylines: Vec::new(),
            pointer: None,
            raw_pointer: None,
            snap_target: None,
            snap_enabled,
            snap_threshold,
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            screen_width: 0,
            screen_height: 0,
            action_map,
        }
    }

    /// Updates screen dimensions after backend configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn drawing_state(&self) -> DrawingState {
        self.state
    }

    /// The anchor of the segment under construction, if any.
    pub fn pending_anchor(&self) -> Option<Point> {
        match self.state {
            DrawingState::Idle => None,
            DrawingState::Anchored { anchor } => Some(anchor),
        }
    }

    /// Segments of the polyline currently being drawn.
    pub fn open_segments(&self) -> &[Segment] {
        &self.open_segments
    }

    /// Polylines finalized by reset, oldest first.
    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Current pointer position, snapped when a snap target is active.
    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    pub fn snap_target(&self) -> Option<SnapHit> {
        self.snap_target
    }

    /// Every committed segment that the pointer may snap onto: finalized
    /// polylines first, then the open polyline.
    pub fn snap_candidates(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.polylines
            .iter()
            .flat_map(|polyline| polyline.iter())
            .chain(self.open_segments.iter())
    }

    /// Finds the nearest committed segment strictly within the snap threshold.
    ///
    /// Candidates are visited in [`snap_candidates`](Self::snap_candidates)
    /// order; on equal distance the first one visited wins.
    pub fn find_snap(&self, raw: Point) -> Option<SnapHit> {
        let mut best: Option<SnapHit> = None;

        for segment in self.snap_candidates() {
            let projection = segment.project(raw);
            if projection.distance() >= self.snap_threshold {
                continue;
            }
            if best.is_none_or(|b| projection.squared_distance < b.projection.squared_distance) {
                best = Some(SnapHit {
                    segment: *segment,
                    projection,
                });
            }
        }

        best
    }

    /// Finalizes the open segments into a polyline and returns to `Idle`.
    ///
    /// An empty open polyline is not appended, so repeated resets with nothing
    /// drawn in between leave `polylines` unchanged. The pending anchor and the
    /// open segments are always cleared together.
    pub fn on_commit_reset(&mut self) -> ResetOutcome {
        let segments = std::mem::take(&mut self.open_segments);
        self.state = DrawingState::Idle;
        self.needs_redraw = true;

        if segments.is_empty() {
            log::debug!("Reset with no open segments; nothing committed");
            return ResetOutcome::Empty;
        }

        let count = segments.len();
        self.polylines.push(Polyline::new(segments));
        log::info!(
            "Committed polyline #{} with {} segment(s)",
            self.polylines.len(),
            count
        );
        ResetOutcome::Committed { segments: count }
    }

    /// Logs the full session at info level.
    pub fn dump_state(&self) {
        log::info!("pointer: {:?} (raw {:?})", self.pointer, self.raw_pointer);
        log::info!("snap: enabled={} target={:?}", self.snap_enabled, self.snap_target);
        log::info!("pending anchor: {:?}", self.pending_anchor());
        log::info!("open segments: {:?}", self.open_segments);
        for (i, polyline) in self.polylines.iter().enumerate() {
            log::info!("polyline {}: {:?}", i, polyline.segments());
        }
    }
}
