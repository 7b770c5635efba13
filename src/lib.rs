//! Flutter Guide Library
//!
//! A terminal guide to setting up Flutter with VS Code. The binary parses
//! its flags, loads settings and hands off to either the TUI or the
//! headless JSON printer.

pub mod headless;

// Re-export main entry points
pub use fguide_tui::run;
pub use headless::{run_headless, write_guide};
