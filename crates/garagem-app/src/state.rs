//! Application state (Model in TEA pattern)

use garagem_core::AppPhase;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::navigation::{Navigator, Screen};
use crate::notice::Notice;

/// Which input context owns the keyboard, derived from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Blocking notice shown, must be dismissed
    Notice,
    /// Confirmation dialog shown
    ConfirmDialog,
    /// Vehicle list
    List,
    /// Typing into the list's filter bar
    FilterInput,
    /// Vehicle detail
    Detail,
    /// Create/edit form
    Form,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Screen stack; each entry owns its controller state
    pub navigator: Navigator,

    /// Blocking notice overlay
    pub notice: Option<Notice>,

    /// Confirmation dialog overlay
    pub confirm_dialog: Option<ConfirmDialogState>,

    pub settings: Settings,

    /// Spinner animation frame
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            navigator: Navigator::new(),
            notice: None,
            confirm_dialog: None,
            settings,
            tick: 0,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.notice.is_some() {
            return UiMode::Notice;
        }
        if self.confirm_dialog.is_some() {
            return UiMode::ConfirmDialog;
        }
        match &self.navigator.top().screen {
            Screen::List(list) if list.editing_filter => UiMode::FilterInput,
            Screen::List(_) => UiMode::List,
            Screen::Detail(_) => UiMode::Detail,
            Screen::Form(_) => UiMode::Form,
        }
    }

    /// Show a blocking notice, replacing any earlier one
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Request application quit
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            self.confirm_dialog = Some(ConfirmDialogState::quit_confirmation());
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog = None;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
