//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (bordered, one inner row)
    pub header: Rect,

    /// Active screen body
    pub body: Rect,

    /// Key hints for the current mode
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Split the list body into the filter bar and the table
pub fn split_list(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(body);
    (chunks[0], chunks[1])
}
