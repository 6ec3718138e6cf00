//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    Space,
    Shift,
    Ctrl,
    Alt,
    F10,
    F12,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used to look the key up in the keybinding map.
    ///
    /// Modifier keys and unknown keys have no binding name.
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_lowercase().to_string()),
            Key::Escape => "escape",
            Key::Return => "return",
            Key::Backspace => "backspace",
            Key::Tab => "tab",
            Key::Space => "space",
            Key::F10 => "f10",
            Key::F12 => "f12",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (places anchor and end points)
    Left,
    /// Right mouse button (drops a pending anchor)
    Right,
    /// Middle mouse button (unused)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_are_lowercase() {
        assert_eq!(Key::Char('S').binding_name().as_deref(), Some("s"));
        assert_eq!(Key::Escape.binding_name().as_deref(), Some("escape"));
        assert_eq!(Key::F12.binding_name().as_deref(), Some("f12"));
        assert_eq!(Key::Ctrl.binding_name(), None);
    }
}
