//! Main render/view function (View in TEA pattern)


use fguide_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::Theme;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only page layout bookkeeping is written back: the content size and
/// section anchors of the rendered page.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let theme = Theme::from_state(state);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.deepest_bg)),
        area,
    );

    let areas = layout::create(area);
    let platform = state.revealed_platform();

    let page = widgets::GuidePage::new(theme, platform, &state.animation)
        .with_cursor(state.selection.platform());
    frame.render_stateful_widget(page, areas.page, &mut state.page);

    let current = state.navigation.focused.or(state.page.current_section());
    let header = widgets::MainHeader::new(theme, state.theme)
        .with_section(current)
        .with_platform(platform);
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::KeyHints::new(theme, state.ui_mode), areas.hints);

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::NavMenu => {
            let menu = widgets::NavMenu::new(
                theme,
                state.navigation.menu,
                state.selection.is_revealed(),
            );
            frame.render_widget(menu, areas.page);
        }
        UiMode::Links => {
            frame.render_widget(widgets::LinksOverlay::new(theme), areas.page);
        }
    }
}
