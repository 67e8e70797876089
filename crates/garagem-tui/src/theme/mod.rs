//! Centralized theme for the Garagem TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;

/// Braille spinner frames, advanced once per tick
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick as usize) % SPINNER.len()]
}
