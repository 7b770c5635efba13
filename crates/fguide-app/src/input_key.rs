//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the update loop can be driven (and tested) without a terminal.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}
