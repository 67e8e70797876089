//! Confirmation dialog widget (delete, quit)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use garagem_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::{palette, styles};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == self.state.selected {
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                styles::text_primary()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal_area = modal_overlay::centered_rect(56, 9, area);
        Clear.render(modal_area, buf);
        modal_overlay::render_shadow(buf, modal_area);

        let block = styles::modal_block(&self.state.title, styles::border_active());
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        let hints = Line::from(vec![
            Span::styled("←/→", styles::key_hint()),
            Span::styled(" escolher  ", styles::text_muted()),
            Span::styled("Enter", styles::key_hint()),
            Span::styled(" confirmar  ", styles::text_muted()),
            Span::styled("Esc", styles::key_hint()),
            Span::styled(" cancelar", styles::text_muted()),
        ]);
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_delete_dialog_renders_title_message_and_options() {
        let state = ConfirmDialogState::delete_confirmation();
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Confirmar Exclusão"));
        assert!(term.buffer_contains("excluir este veículo"));
        assert!(term.buffer_contains("Cancelar"));
        assert!(term.buffer_contains("Excluir"));
    }

    #[test]
    fn test_selected_option_is_highlighted() {
        let mut state = ConfirmDialogState::delete_confirmation();
        state.select_next();
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        let buffer = term.buffer();
        let highlighted: String = buffer
            .content()
            .iter()
            .filter(|c| c.bg == palette::ACCENT)
            .map(|c| c.symbol())
            .collect();
        assert!(highlighted.contains("Excluir"));
        assert!(!highlighted.contains("Cancelar"));
    }

    #[test]
    fn test_fits_compact_terminal() {
        let state = ConfirmDialogState::quit_confirmation();
        let mut term = TestTerminal::compact();
        term.render_widget(ConfirmDialog::new(&state), term.area());
        assert!(term.buffer_contains("Sair"));
    }
}
