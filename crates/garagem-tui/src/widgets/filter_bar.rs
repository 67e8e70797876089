//! Filter inputs above the vehicle table

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use garagem_core::{FilterField, VehicleFilter};

use crate::theme::styles;

pub struct FilterBar<'a> {
    filter: &'a VehicleFilter,
    /// Field with the cursor, when the bar has keyboard focus
    editing: Option<FilterField>,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a VehicleFilter) -> Self {
        Self {
            filter,
            editing: None,
        }
    }

    pub fn editing(mut self, field: Option<FilterField>) -> Self {
        self.editing = field;
        self
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing.is_some()).title(" Filtros ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for field in FilterField::ALL {
            let focused = self.editing == Some(field);
            let label_style = if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {}: ", field.label()), label_style));

            let value = self.filter.get(field);
            if value.is_empty() && !focused {
                spans.push(Span::styled("—", styles::text_muted()));
            } else {
                spans.push(Span::styled(
                    value.to_string(),
                    styles::text_primary().add_modifier(Modifier::UNDERLINED),
                ));
            }
            if focused {
                spans.push(Span::styled("_", styles::key_hint()));
            }
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
