//! fguide-tui - Terminal UI for Flutter Guide
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! fguide-app update loop from terminal events and renders the guide as one
//! scrollable page with a header, overlays and key hints.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
