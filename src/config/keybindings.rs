//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for all actions in the application.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Fold the open segments into a polyline and drop any pending anchor
    Reset,
    Exit,
    ToggleSnap,
    ToggleStatusBar,
    ToggleHelp,
    /// Log the whole drawing session
    DumpState,
}

/// A single keybinding: a key character with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// The key part is stored lowercased so lookups are case-insensitive.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() {
            "+".to_string()
        } else {
            key.to_lowercase()
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// reset = ["Escape"]
/// exit = ["Ctrl+Q"]
/// toggle_snap = ["S"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_reset")]
    pub reset: Vec<String>,

    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_toggle_snap")]
    pub toggle_snap: Vec<String>,

    #[serde(default = "default_toggle_status_bar")]
    pub toggle_status_bar: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_dump_state")]
    pub dump_state: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            reset: default_reset(),
            exit: default_exit(),
            toggle_snap: default_toggle_snap(),
            toggle_status_bar: default_toggle_status_bar(),
            toggle_help: default_toggle_help(),
            dump_state: default_dump_state(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 6] = [
            (&self.reset, Action::Reset),
            (&self.exit, Action::Exit),
            (&self.toggle_snap, Action::ToggleSnap),
            (&self.toggle_status_bar, Action::ToggleStatusBar),
            (&self.toggle_help, Action::ToggleHelp),
            (&self.dump_state, Action::DumpState),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_reset() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_exit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}

fn default_toggle_snap() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_toggle_status_bar() -> Vec<String> {
    vec!["F12".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F10".to_string()]
}

fn default_dump_state() -> Vec<String> {
    vec!["D".to_string()]
}
