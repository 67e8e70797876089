//! Shared modal overlay utilities.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use garagem_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim everything behind a modal
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow along the right and bottom edges of `modal_rect`
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);

    for y in modal_rect.y.saturating_add(1)..=bottom_y {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
    for x in modal_rect.x.saturating_add(1)..=right_x {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}
