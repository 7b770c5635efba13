//! fguide-app - Application state and update loop for Flutter Guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern: every input
//! becomes a [`Message`], [`handler::update`] is the only writer of
//! [`AppState`], and the TUI renders from that state. It also owns the
//! platform selection controller, page navigation, animation progress,
//! configuration loading and the few side effects (opening links, signals).

pub mod actions;
pub mod animation;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod page_view_state;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use process::{process_message, run_update};
pub use selection::{RevealGate, SelectionChange, SelectionState};
pub use state::AppState;
