//! Footer line listing the keys available in the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use garagem_app::UiMode;

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
    record_actions: bool,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self {
            mode,
            record_actions: true,
        }
    }

    /// Whether the detail screen can edit or delete its record right now
    pub fn record_actions(mut self, enabled: bool) -> Self {
        self.record_actions = enabled;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Detail if !self.record_actions => &[("r", "atualizar"), ("Esc", "voltar")],
            UiMode::List => &[
                ("↑↓", "navegar"),
                ("Enter", "abrir"),
                ("n", "novo"),
                ("/", "filtrar"),
                ("c", "limpar filtros"),
                ("r", "atualizar"),
                ("q", "sair"),
            ],
            UiMode::FilterInput => &[
                ("Tab", "próximo filtro"),
                ("↑↓", "navegar"),
                ("Ctrl+U", "limpar campo"),
                ("Enter/Esc", "concluir"),
            ],
            UiMode::Detail => &[
                ("e", "editar"),
                ("d", "excluir"),
                ("r", "atualizar"),
                ("Esc", "voltar"),
            ],
            UiMode::Form => &[
                ("Tab", "próximo campo"),
                ("Enter", "salvar"),
                ("Ctrl+U", "limpar campo"),
                ("Esc", "cancelar"),
            ],
            UiMode::ConfirmDialog => &[("y", "sim"), ("n", "não")],
            UiMode::Notice => &[("Enter", "OK")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::key_hint()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
