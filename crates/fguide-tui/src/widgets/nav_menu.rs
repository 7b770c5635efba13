//! Navigation menu overlay listing the section anchors

use fguide_app::navigation::NavMenuState;
use fguide_core::PageSection;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::open_modal;
use crate::theme::{styles, Theme};

const MENU_WIDTH: u16 = 44;

pub struct NavMenu {
    theme: Theme,
    menu: NavMenuState,
    revealed: bool,
}

impl NavMenu {
    /// `revealed` tells whether gated sections can be jumped to
    pub fn new(theme: Theme, menu: NavMenuState, revealed: bool) -> Self {
        Self {
            theme,
            menu,
            revealed,
        }
    }

    fn entry(&self, section: PageSection) -> Line<'static> {
        let p = self.theme.palette;
        let selected = section == self.menu.selected_section();
        let locked = section.is_gated() && !self.revealed;

        let pointer = if selected {
            self.theme.icons.pointer()
        } else {
            " "
        };
        let label_style = if selected {
            styles::focused_selected(p)
        } else if locked {
            styles::text_muted(p)
        } else {
            styles::text_primary(p)
        };

        let mut spans = vec![
            Span::styled(format!(" {pointer} "), styles::accent(p)),
            Span::styled(format!(" {} ", section.nav_label()), label_style),
        ];
        if locked {
            spans.push(Span::styled(" pick a platform first", styles::text_muted(p)));
        }
        Line::from(spans)
    }
}

impl Widget for NavMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let entries = NavMenuState::entries();
        let height = entries.len() as u16 + 4;
        let modal = open_modal(buf, area, MENU_WIDTH, height, p);

        let block = styles::modal_block(p, " Jump to section ".to_string());
        let inner = block.inner(modal);
        block.render(modal, buf);

        let mut lines: Vec<Line<'static>> = entries.iter().map(|s| self.entry(*s)).collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ↑↓ move  Enter jump  Esc close",
            styles::keybinding(p),
        )));
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_menu_lists_every_anchor() {
        let mut term = TestTerminal::new();
        term.render_widget(
            NavMenu::new(Theme::default(), NavMenuState::default(), true),
            term.area(),
        );
        assert!(term.buffer_contains("Jump to section"));
        for section in PageSection::NAVIGABLE {
            assert!(term.buffer_contains(section.nav_label()));
        }
        assert!(!term.buffer_contains("pick a platform first"));
    }

    #[test]
    fn test_selected_entry_has_pointer() {
        let theme = Theme::default();
        let mut menu = NavMenuState::default();
        menu.highlight(PageSection::ProjectStructure);
        let nav = NavMenu::new(theme, menu, true);
        let line = nav.entry(PageSection::ProjectStructure);
        assert!(line.spans[0].content.contains(theme.icons.pointer()));
        assert_eq!(line.spans[1].style, styles::focused_selected(theme.palette));
    }

    #[test]
    fn test_locked_entries_marked_while_hidden() {
        let mut term = TestTerminal::new();
        term.render_widget(
            NavMenu::new(Theme::default(), NavMenuState::default(), false),
            term.area(),
        );
        assert!(term.buffer_contains("Installation  pick a platform first"));
    }
}
