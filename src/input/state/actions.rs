use crate::config::{Action, KeyBinding};
use crate::input::events::Key;
use log::info;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier state; every other key is looked up
    /// in the keybinding map together with the held modifiers.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(name) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&name) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter; they update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Looks up the action bound to `key` with the currently held modifiers.
    pub(super) fn find_action(&self, key: &str) -> Option<Action> {
        let binding = KeyBinding {
            key: key.to_lowercase(),
            ctrl: self.modifiers.ctrl,
            shift: self.modifiers.shift,
            alt: self.modifiers.alt,
        };
        self.action_map.get(&binding).copied()
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Reset => {
                self.on_commit_reset();
            }
            Action::Exit => {
                self.should_exit = true;
            }
            Action::ToggleSnap => {
                self.snap_enabled = !self.snap_enabled;
                info!(
                    "Snapping {}",
                    if self.snap_enabled { "enabled" } else { "disabled" }
                );
                // Re-evaluate the pointer so the change is visible without moving
                if let Some(raw) = self.raw_pointer {
                    self.on_pointer_move(raw);
                }
                self.needs_redraw = true;
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.needs_redraw = true;
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::DumpState => {
                self.dump_state();
            }
        }
    }
}
