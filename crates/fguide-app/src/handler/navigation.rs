//! Anchor jumps, navigation menu and links overlay handlers

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::navigation::{next_anchor, previous_anchor};
use crate::state::{AppState, UiMode};
use fguide_core::prelude::*;
use fguide_core::{PageSection, LINKS};

use super::UpdateResult;

/// Section navigation starts from: the last jump target, else the viewport top
fn origin(state: &AppState) -> Option<PageSection> {
    state
        .navigation
        .focused
        .or_else(|| state.page.current_section())
}

fn land_on(state: &mut AppState, section: PageSection, row: usize) -> UpdateResult {
    state.page.scroll_to_row(row);
    state.navigation.focused = Some(section);
    debug!("Jumped to #{} (row {})", section.anchor_id(), row);
    UpdateResult::none()
}

pub fn handle_next_section(state: &mut AppState) -> UpdateResult {
    match next_anchor(state.page.anchors(), origin(state)) {
        Some((section, row)) => land_on(state, section, row),
        None => UpdateResult::none(),
    }
}

pub fn handle_previous_section(state: &mut AppState) -> UpdateResult {
    match previous_anchor(state.page.anchors(), origin(state)) {
        Some((section, row)) => land_on(state, section, row),
        None => UpdateResult::none(),
    }
}

/// Jump to a section anchor. Sections behind the reveal gate are ignored.
pub fn handle_jump(state: &mut AppState, section: PageSection) -> UpdateResult {
    if !state.is_section_visible(section) {
        debug!(
            "Ignoring jump to #{}: no platform selected yet",
            section.anchor_id()
        );
        return UpdateResult::none();
    }
    match state.page.anchor_of(section) {
        Some(row) => land_on(state, section, row),
        None => {
            debug!("Ignoring jump to #{}: not rendered yet", section.anchor_id());
            UpdateResult::none()
        }
    }
}

pub fn handle_toggle_menu(state: &mut AppState) -> UpdateResult {
    state.ui_mode = match state.ui_mode {
        UiMode::NavMenu => UiMode::Normal,
        _ => {
            if let Some(section) = origin(state) {
                state.navigation.menu.highlight(section);
            }
            UiMode::NavMenu
        }
    };
    UpdateResult::none()
}

pub fn handle_menu_confirm(state: &mut AppState) -> UpdateResult {
    let section = state.navigation.menu.selected_section();
    state.ui_mode = UiMode::Normal;
    UpdateResult::message(Message::JumpTo(section))
}

pub fn handle_open_link(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(link) = LINKS.get(index) else {
        debug!("No link at index {index}");
        return UpdateResult::none();
    };
    state.ui_mode = UiMode::Normal;
    info!("Opening {} ({})", link.label, link.url);
    UpdateResult::action(UpdateAction::OpenUrl {
        url: link.url.to_string(),
        browser: state.settings.links.browser.clone(),
    })
}
