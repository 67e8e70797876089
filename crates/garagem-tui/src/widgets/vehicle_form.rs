//! Create/edit form with inline validation errors

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use garagem_app::screens::FormScreen;
use garagem_core::{FormField, LoadPhase};

use crate::theme::{spinner_frame, styles};

pub struct VehicleFormView<'a> {
    form: &'a FormScreen,
    title: &'a str,
    tick: u64,
}

impl<'a> VehicleFormView<'a> {
    pub fn new(form: &'a FormScreen, title: &'a str, tick: u64) -> Self {
        Self { form, title, tick }
    }

    fn field_lines(&self, field: FormField) -> Vec<Line<'static>> {
        let focused = self.form.focused == field && self.form.accepts_input();
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        let mut input = vec![
            Span::styled(if focused { "▶ " } else { "  " }, styles::accent()),
            Span::styled(format!("{:<7}", field.label()), label_style),
            Span::styled(
                self.form.form.value(field).to_string(),
                styles::text_primary().add_modifier(Modifier::UNDERLINED),
            ),
        ];
        if focused {
            input.push(Span::styled("_", styles::key_hint()));
        }

        let mut lines = vec![Line::from(input)];
        if let Some(message) = self.form.errors.get(&field) {
            lines.push(Line::from(vec![
                Span::raw("         "),
                Span::styled(message.clone(), styles::status_red()),
            ]));
        }
        lines
    }
}

impl Widget for VehicleFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(format!(" {} ", self.title));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        block.render(area, buf);

        let lines: Vec<Line> = match self.form.phase {
            LoadPhase::Loading => vec![Line::styled(
                format!("{} Carregando veículo...", spinner_frame(self.tick)),
                styles::accent(),
            )],
            LoadPhase::Error => vec![Line::styled(
                "Não foi possível carregar o veículo. [r] tentar novamente",
                styles::status_red(),
            )],
            LoadPhase::Ready => {
                let mut lines: Vec<Line> = FormField::ALL
                    .into_iter()
                    .flat_map(|field| self.field_lines(field))
                    .collect();
                lines.push(Line::default());
                lines.push(if self.form.busy {
                    Line::styled(
                        format!("{} Salvando...", spinner_frame(self.tick)),
                        styles::accent(),
                    )
                } else {
                    Line::styled("[Enter] Salvar", styles::key_hint())
                });
                lines
            }
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
