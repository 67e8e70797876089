//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! that the handlers (and the headless runner) never depend on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}
