//! Blocking notice: error or success message that must be acknowledged

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use garagem_app::{Notice, NoticeKind};

use super::modal_overlay;
use crate::theme::styles;

pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal_area = modal_overlay::centered_rect(50, 7, area);
        Clear.render(modal_area, buf);
        modal_overlay::render_shadow(buf, modal_area);

        let (border, text) = match self.notice.kind {
            NoticeKind::Error => (styles::status_red(), styles::status_red()),
            NoticeKind::Success => (styles::status_green(), styles::text_primary()),
        };
        let block = styles::modal_block(&self.notice.title, border);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.notice.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(text)
            .render(chunks[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::key_hint()),
            Span::styled("] OK", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);
    }
}
