//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! dialgen-app never depends on a terminal library and the key handlers can
//! be driven directly from tests.

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character pressed with Ctrl held (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// The decimal digit this key types, if any.
    pub fn digit(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if c.is_ascii_digit() => Some(*c),
            _ => None,
        }
    }
}
