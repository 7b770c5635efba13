//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use fguide_core::{PageSection, Platform, LINKS};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::NavMenu => handle_key_nav_menu(key),
        UiMode::Links => handle_key_links(key),
    }
}

/// Handle key events while reading the page
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Platform selector
        // ─────────────────────────────────────────────────────────
        InputKey::Char('1') => Some(Message::SelectPlatform(Platform::Windows)),
        InputKey::Char('2') => Some(Message::SelectPlatform(Platform::MacOs)),
        InputKey::Char('3') => Some(Message::SelectPlatform(Platform::Linux)),
        InputKey::Left | InputKey::Char('h') => Some(Message::PreviousPlatform),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextPlatform),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        // ─────────────────────────────────────────────────────────
        // Sections and overlays
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PreviousSection),
        InputKey::Char('n') => Some(Message::ToggleNavMenu),
        InputKey::Char('s') => Some(Message::JumpTo(PageSection::Platforms)),
        InputKey::Char('f') => Some(Message::JumpTo(PageSection::FirstApp)),
        InputKey::Char('o') => Some(Message::ShowLinks),

        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('a') => Some(Message::ToggleAnimations),

        _ => None,
    }
}

/// Handle key events in the navigation menu
fn handle_key_nav_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::NavMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::NavMenuDown),
        InputKey::Enter => Some(Message::NavMenuConfirm),
        InputKey::Esc | InputKey::Char('n') => Some(Message::CloseNavMenu),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the links overlay
fn handle_key_links(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            (index < LINKS.len()).then_some(Message::OpenLink(index))
        }
        InputKey::Esc | InputKey::Char('o') => Some(Message::CloseLinks),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
