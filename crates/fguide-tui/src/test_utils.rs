//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.

use fguide_app::config::Settings;
use fguide_app::AppState;
use fguide_core::Platform;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with [`crate::render::view`]
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Plain text of rendered lines, one string per line
pub fn lines_text(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

/// Whether any rendered line contains `text`
pub fn lines_contain(lines: &[Line<'_>], text: &str) -> bool {
    lines_text(lines).iter().any(|l| l.contains(text))
}

/// AppState with animations off, so every section renders in full
pub fn create_test_state() -> AppState {
    let mut settings = Settings::default();
    settings.ui.animations = false;
    AppState::with_settings(settings)
}

/// Test state with `platform` already revealed
pub fn create_revealed_state(platform: Platform) -> AppState {
    let mut state = create_test_state();
    state.selection.select_platform(platform);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_compact_terminal() {
        let term = TestTerminal::compact();
        assert_eq!(term.area().width, COMPACT_WIDTH);
        assert_eq!(term.area().height, COMPACT_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
    }

    #[test]
    fn test_revealed_state_has_platform() {
        let state = create_revealed_state(Platform::MacOs);
        assert_eq!(state.revealed_platform(), Some(Platform::MacOs));
    }
}
