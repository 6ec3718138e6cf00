use crate::geometry::{Point, Segment};
use crate::input::events::MouseButton;
use log::{debug, warn};

use super::{ClickOutcome, DrawingState, InputState, SessionError};

impl InputState {
    /// Processes pointer motion.
    ///
    /// The raw position is snapped onto the nearest committed segment within
    /// the snap threshold; the pending anchor itself is never a snap target.
    /// Only the pointer position and snap target change.
    pub fn on_pointer_move(&mut self, raw: Point) {
        let hit = if self.snap_enabled {
            self.find_snap(raw)
        } else {
            None
        };
        let position = hit.map_or(raw, |hit| hit.projection.point);

        if let Some(hit) = hit {
            if self.snap_target.map(|t| t.segment) != Some(hit.segment) {
                debug!(
                    "Snapped onto segment {:?} at ({:.1}, {:.1})",
                    hit.segment, position.x, position.y
                );
            }
        }

        if self.pointer != Some(position) || self.snap_target != hit {
            self.needs_redraw = true;
        }

        self.raw_pointer = Some(raw);
        self.pointer = Some(position);
        self.snap_target = hit;
    }

    /// Places an anchor or commits a segment at the current pointer position.
    ///
    /// # Errors
    /// [`SessionError::NoPointerPosition`] if the pointer has never moved; the
    /// session is left untouched.
    pub fn on_click(&mut self) -> Result<ClickOutcome, SessionError> {
        let pointer = self.pointer.ok_or(SessionError::NoPointerPosition)?;

        let outcome = match self.state {
            DrawingState::Idle => {
                self.state = DrawingState::Anchored { anchor: pointer };
                ClickOutcome::Anchored(pointer)
            }
            DrawingState::Anchored { anchor } => {
                let segment = Segment::new(anchor, pointer);
                self.open_segments.push(segment);
                self.state = DrawingState::Idle;
                debug!(
                    "Committed segment ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    anchor.x, anchor.y, pointer.x, pointer.y
                );
                ClickOutcome::Committed(segment)
            }
        };

        self.needs_redraw = true;
        Ok(outcome)
    }

    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click: [`on_click`](Self::on_click); a click before any motion is logged and ignored
    /// - Right click: drops the pending anchor, keeping committed segments
    pub fn on_mouse_press(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => {
                if let Err(err) = self.on_click() {
                    warn!("Ignoring click: {}", err);
                }
            }
            MouseButton::Right => {
                if matches!(self.state, DrawingState::Anchored { .. }) {
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                }
            }
            MouseButton::Middle => {}
        }
    }
}
