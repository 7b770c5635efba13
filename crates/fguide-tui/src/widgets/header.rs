//! Header bar: brand, section navigation and the selected platform.
//!
//! The header sits outside the scroll area, so it stays visible while the
//! page scrolls underneath.

use fguide_app::config::ThemeMode;
use fguide_core::{PageSection, Platform, BRAND};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

/// Main header with brand, section navigation and platform pill
pub struct MainHeader {
    theme: Theme,
    mode: ThemeMode,
    current: Option<PageSection>,
    platform: Option<Platform>,
}

impl MainHeader {
    pub fn new(theme: Theme, mode: ThemeMode) -> Self {
        Self {
            theme,
            mode,
            current: None,
            platform: None,
        }
    }

    /// Highlight the section at the top of the viewport
    pub fn with_section(mut self, section: Option<PageSection>) -> Self {
        self.current = section;
        self
    }

    /// Show the revealed platform
    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    fn brand(&self) -> Line<'static> {
        let p = self.theme.palette;
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.theme.icons.dot().to_string(), styles::accent(p)),
            Span::raw(" "),
            Span::styled(BRAND.to_string(), styles::accent_bold(p)),
        ])
    }

    /// Navigation labels; gated sections are dimmed until a platform is picked
    fn nav(&self) -> Line<'static> {
        let p = self.theme.palette;
        let mut spans = vec![Span::styled("│ ", styles::border_inactive(p))];
        for section in PageSection::NAVIGABLE {
            let style = if Some(section) == self.current {
                styles::focused_selected(p)
            } else if section.is_gated() && self.platform.is_none() {
                styles::text_muted(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", section.nav_label()), style));
        }
        Line::from(spans)
    }

    fn status(&self) -> Line<'static> {
        let p = self.theme.palette;
        let pill = match self.platform {
            Some(platform) => Span::styled(
                format!(
                    " {} {} ",
                    self.theme.icons.platform(platform),
                    platform.label()
                ),
                styles::pill(p),
            ),
            None => Span::styled(" no platform ", styles::text_muted(p)),
        };
        Line::from(vec![
            pill,
            Span::raw(" "),
            Span::styled(self.mode.to_string(), styles::text_muted(p)),
            Span::raw(" "),
        ])
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = self.brand();
        let nav = self.nav();
        let status = self.status();
        let brand_width = brand.width() as u16;
        let nav_width = nav.width() as u16;
        let status_width = status.width() as u16;

        buf.set_line(inner.x, inner.y, &brand, inner.width);

        let right_x = inner.right().saturating_sub(status_width);
        if brand_width + 1 + status_width <= inner.width {
            buf.set_line(right_x, inner.y, &status, status_width);
        }
        // Navigation only when it fits between brand and status
        if brand_width + 2 + nav_width + status_width <= inner.width {
            buf.set_line(inner.x + brand_width + 1, inner.y, &nav, nav_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_brand() {
        let mut term = TestTerminal::compact();
        term.render_widget(
            MainHeader::new(Theme::default(), ThemeMode::Dark),
            term.area(),
        );
        assert!(term.buffer_contains(BRAND));
    }

    #[test]
    fn test_header_lists_sections_on_wide_terminal() {
        let mut term = TestTerminal::with_size(140, 3);
        term.render_widget(
            MainHeader::new(Theme::default(), ThemeMode::Dark).with_platform(Some(Platform::Linux)),
            term.area(),
        );
        for section in PageSection::NAVIGABLE {
            assert!(term.buffer_contains(section.nav_label()));
        }
        assert!(term.buffer_contains("λ Linux"));
        assert!(term.buffer_contains("dark"));
    }

    #[test]
    fn test_header_drops_navigation_when_narrow() {
        let mut term = TestTerminal::new();
        term.render_widget(
            MainHeader::new(Theme::default(), ThemeMode::Light),
            term.area(),
        );
        assert!(term.buffer_contains(BRAND));
        assert!(term.buffer_contains("no platform"));
        assert!(!term.buffer_contains("Project Structure"));
    }

    #[test]
    fn test_current_section_is_highlighted() {
        let theme = Theme::default();
        let header = MainHeader::new(theme, ThemeMode::Dark)
            .with_platform(Some(Platform::Windows))
            .with_section(Some(PageSection::Installation));
        let nav = header.nav();
        let highlighted: Vec<_> = nav
            .spans
            .iter()
            .filter(|s| s.style == styles::focused_selected(theme.palette))
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(highlighted, ["Installation"]);
    }
}
