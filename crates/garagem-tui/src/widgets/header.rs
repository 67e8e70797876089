//! Header bar: app name, current screen title, activity spinner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, spinner_frame, styles};

pub struct MainHeader<'a> {
    screen_title: &'a str,
    /// Breadcrumb depth of the navigation stack
    depth: usize,
    busy: bool,
    tick: u64,
}

impl<'a> MainHeader<'a> {
    pub fn new(screen_title: &'a str) -> Self {
        Self {
            screen_title,
            depth: 1,
            busy: false,
            tick: 0,
        }
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Show the spinner while a request is in flight
    pub fn busy(mut self, busy: bool, tick: u64) -> Self {
        self.busy = busy;
        self.tick = tick;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = if self.busy {
            (spinner_frame(self.tick), styles::accent())
        } else {
            ("●", styles::status_green())
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled("Garagem", styles::accent_bold()),
        ];
        if self.depth > 1 {
            spans.push(Span::styled(" / ", styles::text_muted()));
            spans.push(Span::styled(self.screen_title, styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        let right = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Ctrl+C", styles::key_hint()),
            Span::styled("] Sair ", styles::text_muted()),
        ]);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
