//! Shared modal overlay utilities: centering, dimming, shadows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette::Palette;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so an overlay stands out
pub fn dim_background(buf: &mut Buffer, area: Rect, p: &Palette) {
    let dim_style = Style::default().fg(p.text_muted).bg(p.deepest_bg);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow along the right and bottom edges of `modal_rect`
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, p: &Palette) {
    let shadow_style = Style::default().fg(p.shadow).bg(p.shadow);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for y in modal_rect.y.saturating_add(1)..bottom_y.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
    for x in modal_rect.x.saturating_add(1)..right_x.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

/// Dim `area`, then clear a centered `width` x `height` modal with a shadow.
/// Returns the modal rect.
pub fn open_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16, p: &Palette) -> Rect {
    dim_background(buf, area, p);
    let modal = centered_rect(width, height, area);
    render_shadow(buf, modal, p);
    clear_area(buf, modal);
    modal
}
