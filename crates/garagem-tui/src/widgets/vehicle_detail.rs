//! Vehicle detail card

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use garagem_app::screens::DetailScreen;
use garagem_core::{FormField, LoadPhase, Vehicle};

use crate::theme::{spinner_frame, styles};

pub struct VehicleDetail<'a> {
    detail: &'a DetailScreen,
    tick: u64,
}

impl<'a> VehicleDetail<'a> {
    pub fn new(detail: &'a DetailScreen, tick: u64) -> Self {
        Self { detail, tick }
    }
}

fn field_lines(vehicle: &Vehicle) -> Vec<Line<'static>> {
    let year = vehicle.year.to_string();
    let values: [(FormField, &str); 5] = [
        (FormField::Plate, &vehicle.plate),
        (FormField::Make, &vehicle.make),
        (FormField::Model, &vehicle.model),
        (FormField::Year, &year),
        (FormField::Color, &vehicle.color),
    ];

    let mut lines = vec![
        Line::from(Span::styled(vehicle.title(), styles::accent_bold())),
        Line::default(),
    ];
    for (field, value) in values {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8}: ", field.label()), styles::text_secondary()),
            Span::styled(value.to_string(), styles::text_primary()),
        ]));
    }
    lines
}

impl Widget for VehicleDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Detalhes do Veículo ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = match (&self.detail.vehicle, self.detail.phase) {
            // Keep the last good record visible while a refetch is running
            (Some(vehicle), LoadPhase::Ready | LoadPhase::Loading) => field_lines(vehicle),
            (_, LoadPhase::Error) => vec![Line::styled(
                "Não foi possível carregar o veículo. [r] tentar novamente",
                styles::status_red(),
            )],
            (None, _) => vec![Line::styled(
                format!(
                    "{} Carregando veículo {}...",
                    spinner_frame(self.tick),
                    self.detail.vehicle_id
                ),
                styles::accent(),
            )],
        };

        if self.detail.deleting {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("{} Excluindo...", spinner_frame(self.tick)),
                styles::status_red(),
            ));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(inner.inner(Margin::new(2, 1)), buf);
    }
}
