//! One-row keybinding hints for the current UI mode

use fguide_app::state::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

const NORMAL: &[(&str, &str)] = &[
    ("1-3", "platform"),
    ("↑↓", "scroll"),
    ("Tab", "next section"),
    ("n", "menu"),
    ("o", "links"),
    ("t", "theme"),
    ("a", "animations"),
    ("q", "quit"),
];

const NAV_MENU: &[(&str, &str)] = &[("↑↓", "move"), ("Enter", "jump"), ("Esc", "close")];

const LINKS: &[(&str, &str)] = &[("1-6", "open"), ("Esc", "close")];

pub struct KeyHints {
    theme: Theme,
    mode: UiMode,
}

impl KeyHints {
    pub fn new(theme: Theme, mode: UiMode) -> Self {
        Self { theme, mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => NORMAL,
            UiMode::NavMenu => NAV_MENU,
            UiMode::Links => LINKS,
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Short terminals leave the hints row empty, just below the buffer
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.theme.palette;
        buf.set_style(area, Style::default().bg(p.card_bg));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!("[{key}]"), styles::keybinding(p)));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted(p)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hints_follow_mode() {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(KeyHints::new(Theme::default(), UiMode::Normal), term.area());
        assert!(term.buffer_contains("[1-3] platform"));
        assert!(term.buffer_contains("[q] quit"));

        term.render_widget(KeyHints::new(Theme::default(), UiMode::NavMenu), term.area());
        assert!(term.buffer_contains("[Enter] jump"));
        assert!(!term.buffer_contains("[q] quit"));
    }

    #[test]
    fn test_empty_area_below_buffer_is_skipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 2));
        KeyHints::new(Theme::default(), UiMode::Normal).render(Rect::new(0, 2, 80, 0), &mut buf);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 80, 2)));
    }

    #[test]
    fn test_links_hint_matches_link_count() {
        assert_eq!(LINKS[0].0, format!("1-{}", fguide_core::LINKS.len()));
    }
}
