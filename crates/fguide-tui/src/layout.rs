//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Brand, section navigation and selected platform
    pub header: Rect,

    /// The scrollable guide page
    pub page: Rect,

    /// One-row keybinding hints
    pub hints: Rect,
}

/// Split the screen into header, page and hints
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        page: chunks[1],
        hints: chunks[2],
    }
}
