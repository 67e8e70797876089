//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! `garagem-tui`. Options are ordered cancel-first; the last option is the
//! affirmative one.

use crate::message::Message;

/// What an accepted dialog commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Delete,
    Quit,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub kind: ConfirmKind,
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    /// Highlighted option, starts on the cancel option
    pub selected: usize,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        kind: ConfirmKind,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Two-phase delete gesture, first phase
    pub fn delete_confirmation() -> Self {
        Self::new(
            ConfirmKind::Delete,
            "Confirmar Exclusão",
            "Você tem certeza que deseja excluir este veículo?",
            vec![
                ("Cancelar", Message::CancelDelete),
                ("Excluir", Message::ConfirmDelete),
            ],
        )
    }

    /// Create a quit confirmation dialog state
    pub fn quit_confirmation() -> Self {
        Self::new(
            ConfirmKind::Quit,
            "Sair da Garagem?",
            "Deseja realmente sair?",
            vec![("Cancelar", Message::CancelQuit), ("Sair", Message::ConfirmQuit)],
        )
    }

    pub fn is_delete(&self) -> bool {
        self.kind == ConfirmKind::Delete
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, m)| m.clone())
    }

    pub fn cancel_message(&self) -> Option<Message> {
        self.options.first().map(|(_, m)| m.clone())
    }

    pub fn accept_message(&self) -> Option<Message> {
        self.options.last().map(|(_, m)| m.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_confirmation_defaults_to_cancel() {
        let dialog = ConfirmDialogState::delete_confirmation();
        assert_eq!(dialog.title, "Confirmar Exclusão");
        assert!(dialog.is_delete());
        assert!(matches!(dialog.selected_message(), Some(Message::CancelDelete)));
        assert!(matches!(dialog.accept_message(), Some(Message::ConfirmDelete)));
    }

    #[test]
    fn test_selection_wraps() {
        let mut dialog = ConfirmDialogState::quit_confirmation();
        assert_eq!(dialog.kind, ConfirmKind::Quit);
        dialog.select_next();
        assert!(matches!(dialog.selected_message(), Some(Message::ConfirmQuit)));
        dialog.select_next();
        assert_eq!(dialog.selected, 0);
        dialog.select_previous();
        assert_eq!(dialog.selected, 1);
    }
}
