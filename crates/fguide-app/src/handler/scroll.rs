//! Scroll message handlers
//!
//! Manual scrolling drops the focus left by the last anchor jump.

use crate::state::AppState;

use super::UpdateResult;

fn scrolled(state: &mut AppState) -> UpdateResult {
    state.navigation.focused = None;
    UpdateResult::none()
}

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.page.scroll_up(1);
    scrolled(state)
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.page.scroll_down(1);
    scrolled(state)
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.page.scroll_to_top();
    scrolled(state)
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.page.scroll_to_bottom();
    scrolled(state)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.page.page_up();
    scrolled(state)
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.page.page_down();
    scrolled(state)
}
