//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use fguide_app::input_key::InputKey;
use fguide_app::message::Message;
use fguide_core::prelude::*;
use std::time::Duration;

/// Interval between animation ticks when no input arrives
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events, yielding a tick on timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(TICK_RATE)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // The next draw picks up the new size
        Event::Resize(width, height) => {
            trace!("Terminal resized to {}x{}", width, height);
            Ok(None)
        }
        _ => Ok(None),
    }
}
