//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use garagem_app::navigation::Screen;
use garagem_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// A request is in flight on the visible screen
fn screen_busy(screen: &Screen) -> bool {
    match screen {
        Screen::List(list) => list.phase.is_loading(),
        Screen::Detail(detail) => detail.phase.is_loading() || detail.deleting,
        Screen::Form(form) => form.phase.is_loading() || form.busy,
    }
}

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let top = state.navigator.top();
    let title = top.screen.title();

    let header = widgets::MainHeader::new(title)
        .depth(state.navigator.depth())
        .busy(screen_busy(&top.screen), state.tick);
    frame.render_widget(header, areas.header);

    match &top.screen {
        Screen::List(list) => {
            let (filter_area, table_area) = layout::split_list(areas.body);
            let editing = list.editing_filter.then_some(list.filter_focus);
            frame.render_widget(
                widgets::FilterBar::new(list.filter()).editing(editing),
                filter_area,
            );
            frame.render_widget(widgets::VehicleTable::new(list, state.tick), table_area);
        }
        Screen::Detail(detail) => {
            frame.render_widget(widgets::VehicleDetail::new(detail, state.tick), areas.body);
        }
        Screen::Form(form) => {
            frame.render_widget(
                widgets::VehicleFormView::new(form, title, state.tick),
                areas.body,
            );
        }
    }

    let mode = state.ui_mode();
    let record_actions = top
        .screen
        .as_detail()
        .map_or(true, |detail| detail.accepts_record_actions());
    frame.render_widget(
        widgets::KeyHints::new(mode).record_actions(record_actions),
        areas.footer,
    );

    // Overlays: a notice always sits above a dialog
    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
    if mode == UiMode::Notice {
        if let Some(notice) = &state.notice {
            frame.render_widget(widgets::NoticeDialog::new(notice), area);
        }
    }
}
