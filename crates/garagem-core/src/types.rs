//! Small lifecycle enums shared by the app and TUI layers

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Fetch lifecycle of a screen backed by the remote registry.
///
/// `Loading → Ready` on success, `Loading → Error` on failure. A new focus
/// event always restarts at `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Error,
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}
