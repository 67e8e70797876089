//! Vehicle table for the list screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use garagem_app::screens::ListScreen;
use garagem_core::LoadPhase;

use crate::theme::{palette, spinner_frame, styles};

pub struct VehicleTable<'a> {
    list: &'a ListScreen,
    tick: u64,
}

impl<'a> VehicleTable<'a> {
    pub fn new(list: &'a ListScreen, tick: u64) -> Self {
        Self { list, tick }
    }

    /// Placeholder shown instead of rows, if any
    fn placeholder(&self) -> Option<Line<'static>> {
        match self.list.phase {
            LoadPhase::Error => Some(Line::styled(
                "Não foi possível carregar os veículos. [r] tentar novamente",
                styles::status_red(),
            )),
            LoadPhase::Loading if self.list.snapshot().is_empty() => Some(Line::styled(
                format!("{} Carregando veículos...", spinner_frame(self.tick)),
                styles::accent(),
            )),
            _ if self.list.snapshot().is_empty() => Some(Line::styled(
                "Nenhum veículo cadastrado. [n] cadastrar",
                styles::text_muted(),
            )),
            _ if self.list.visible_len() == 0 => Some(Line::styled(
                "Nenhum veículo corresponde aos filtros.",
                styles::text_muted(),
            )),
            _ => None,
        }
    }
}

impl Widget for VehicleTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Veículos ({}/{}) ",
            self.list.visible_len(),
            self.list.snapshot().len()
        );
        let block = styles::glass_block(!self.list.editing_filter).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if let Some(line) = self.placeholder() {
            let y = inner.y + inner.height / 2;
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            return;
        }

        let header = Row::new(["Placa", "Marca", "Modelo", "Ano", "Cor"])
            .style(styles::text_secondary().add_modifier(Modifier::BOLD));

        let rows = self.list.visible().map(|v| {
            Row::new([
                Cell::from(v.plate.clone()),
                Cell::from(v.make.clone()),
                Cell::from(v.model.clone()),
                Cell::from(v.year.to_string()),
                Cell::from(v.color.clone()),
            ])
            .style(styles::text_primary())
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(14),
                Constraint::Min(14),
                Constraint::Length(6),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(palette::SELECTED_ROW_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(self.list.selected()));
        StatefulWidget::render(table, inner, buf, &mut state);
    }
}
