//! Input handling and the segment drawing state machine.
//!
//! This module translates backend keyboard and pointer events into drawing
//! operations. [`InputState`] owns the drawing session: the pending anchor,
//! open segments, finalized polylines and the (possibly snapped) pointer.

pub mod events;
pub mod modifiers;
pub mod state;

pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{
    ClickOutcome, DEFAULT_SNAP_THRESHOLD, DrawingState, InputState, ResetOutcome, SessionError,
    SnapHit,
};
