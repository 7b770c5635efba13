//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, UiMode};
use crate::AppState;
use fguide_core::prelude::*;

use super::{keys::handle_key, navigation, scroll, selection, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let visible = state.page.visible_sections();
            state.animation.observe(&visible);
            state.animation.tick();
            UpdateResult::none()
        }

        Message::Mount => selection::handle_mount(state),

        // ─────────────────────────────────────────────────────────
        // Platform Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectPlatform(platform) => selection::handle_select(state, platform),
        Message::NextPlatform => {
            let next = state.selection.platform().next();
            selection::handle_select(state, next)
        }
        Message::PreviousPlatform => {
            let prev = state.selection.platform().prev();
            selection::handle_select(state, prev)
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Anchor Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextSection => navigation::handle_next_section(state),
        Message::PreviousSection => navigation::handle_previous_section(state),
        Message::JumpTo(section) => navigation::handle_jump(state, section),

        Message::ToggleNavMenu => navigation::handle_toggle_menu(state),
        Message::CloseNavMenu => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::NavMenuUp => {
            state.navigation.menu.move_up();
            UpdateResult::none()
        }
        Message::NavMenuDown => {
            state.navigation.menu.move_down();
            UpdateResult::none()
        }
        Message::NavMenuConfirm => navigation::handle_menu_confirm(state),

        Message::ShowLinks => {
            state.ui_mode = UiMode::Links;
            UpdateResult::none()
        }
        Message::CloseLinks => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::OpenLink(index) => navigation::handle_open_link(state, index),

        // ─────────────────────────────────────────────────────────
        // Appearance
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            debug!("Theme switched to {}", state.theme);
            UpdateResult::none()
        }
        Message::ToggleAnimations => {
            let enabled = !state.animation.is_enabled();
            state.animation.set_enabled(enabled);
            debug!("Animations {}", if enabled { "enabled" } else { "disabled" });
            UpdateResult::none()
        }
    }
}
