//! The scrollable guide page.
//!
//! Every section is a [`SectionView`] producing styled lines for a width.
//! [`GuidePage`] stacks the sections on the page, records where each one
//! starts (its anchor) into [`PageViewState`] and draws the window selected
//! by the scroll offset.

use fguide_app::animation::AnimationState;
use fguide_app::page_view_state::PageViewState;
use fguide_core::{PageSection, Platform};
use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
};

use super::{
    Comparison, EditorSetup, FirstApp, Footer, Hero, Installation, PlatformSelector,
    ProjectStructure,
};
use crate::theme::{styles, Theme};

/// Widest the page content grows before it is centered
pub const MAX_CONTENT_WIDTH: u16 = 100;

/// One section of the page
pub trait SectionView {
    fn section(&self) -> PageSection;

    /// Styled rows of the section laid out for `width` cells
    fn lines(&self, width: u16) -> Vec<Line<'static>>;
}

/// All rows of the page plus the row each section starts on
#[derive(Debug, Default)]
pub struct PageContent {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(PageSection, usize)>,
}

impl PageContent {
    /// Stack `views` in order. Rows a section has not revealed yet stay
    /// blank so anchors do not move while it animates in.
    pub fn compose(
        views: &[Box<dyn SectionView + '_>],
        width: u16,
        animation: &AnimationState,
    ) -> Self {
        let mut content = PageContent::default();
        for view in views {
            let section = view.section();
            let mut lines = view.lines(width);
            if lines.is_empty() {
                continue;
            }
            if let Some(revealed) = animation.revealed_lines(section) {
                for line in lines.iter_mut().skip(revealed) {
                    *line = Line::default();
                }
            }
            content.anchors.push((section, content.lines.len()));
            content.lines.extend(lines);
        }
        content
    }
}

pub struct GuidePage<'a> {
    theme: Theme,
    platform: Option<Platform>,
    /// Platform highlighted in the selector, revealed or not
    cursor: Platform,
    animation: &'a AnimationState,
}

impl<'a> GuidePage<'a> {
    /// `platform` is the revealed platform; `None` keeps the gated
    /// sections off the page
    pub fn new(theme: Theme, platform: Option<Platform>, animation: &'a AnimationState) -> Self {
        Self {
            theme,
            platform,
            cursor: platform.unwrap_or_default(),
            animation,
        }
    }

    /// Highlight `cursor` in the selector while the gate is still closed
    pub fn with_cursor(mut self, cursor: Platform) -> Self {
        self.cursor = self.platform.unwrap_or(cursor);
        self
    }

    /// Sections in page order
    fn views(&self) -> Vec<Box<dyn SectionView + 'a>> {
        let theme = self.theme;
        let mut views: Vec<Box<dyn SectionView + 'a>> = vec![
            Box::new(Hero::new(theme, self.animation)),
            Box::new(Comparison::new(theme)),
            Box::new(
                PlatformSelector::new(theme, self.cursor).awaiting_choice(self.platform.is_none()),
            ),
        ];
        if self.platform.is_some() {
            views.push(Box::new(Installation::new(theme, self.platform)));
            views.push(Box::new(EditorSetup::new(theme, self.platform)));
            views.push(Box::new(ProjectStructure::new(theme, self.platform)));
            views.push(Box::new(FirstApp::new(theme, self.platform)));
        }
        views.push(Box::new(Footer::new(theme)));
        views
    }

    /// Centered column the sections are laid out in, leaving the right
    /// edge for the scrollbar
    fn content_area(area: Rect) -> Rect {
        let inner = area.inner(Margin::new(1, 0));
        let width = inner.width.saturating_sub(1).min(MAX_CONTENT_WIDTH);
        let x = inner.x + (inner.width.saturating_sub(1).saturating_sub(width)) / 2;
        Rect::new(x, inner.y, width, inner.height)
    }
}

impl StatefulWidget for GuidePage<'_> {
    type State = PageViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let p = self.theme.palette;
        Block::default()
            .style(Style::default().bg(p.deepest_bg).fg(p.text_primary))
            .render(area, buf);
        if area.width < 4 || area.height == 0 {
            return;
        }

        let content_area = Self::content_area(area);
        let content = PageContent::compose(&self.views(), content_area.width, self.animation);

        let visible = usize::from(area.height);
        state.update_content_size(content.lines.len(), visible);
        state.set_anchors(content.anchors);

        let window: Vec<Line<'static>> = content
            .lines
            .into_iter()
            .skip(state.offset)
            .take(visible)
            .collect();
        Paragraph::new(window).render(content_area, buf);

        if state.total_lines > visible {
            let mut scrollbar = ScrollbarState::new(state.total_lines.saturating_sub(visible))
                .position(state.offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(styles::accent(p))
                .track_style(styles::border_inactive(p))
                .render(area, buf, &mut scrollbar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lines_text, TestTerminal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still() -> AnimationState {
        AnimationState::new(false)
    }

    #[test]
    fn test_hidden_gate_leaves_instructional_sections_out() {
        let anim = still();
        let page = GuidePage::new(Theme::default(), None, &anim);
        let content = PageContent::compose(&page.views(), 80, &anim);
        let sections: Vec<_> = content.anchors.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sections,
            [
                PageSection::Hero,
                PageSection::Comparison,
                PageSection::Platforms,
                PageSection::Footer
            ]
        );
    }

    #[test]
    fn test_hidden_gate_still_lists_cursor_requirements() {
        let anim = still();
        let page = GuidePage::new(Theme::default(), None, &anim).with_cursor(Platform::MacOs);
        let content = PageContent::compose(&page.views(), 80, &anim);
        let text = lines_text(&content.lines);
        assert!(text.iter().any(|l| l.contains("System Requirements for macOS")));
        assert!(!text.iter().any(|l| l.contains("Installation Steps for")));
    }

    #[test]
    fn test_revealed_page_has_every_section_in_order() {
        let anim = still();
        let page = GuidePage::new(Theme::default(), Some(Platform::Linux), &anim);
        let content = PageContent::compose(&page.views(), 80, &anim);
        let sections: Vec<_> = content.anchors.iter().map(|(s, _)| *s).collect();
        assert_eq!(sections, PageSection::ALL);
        assert!(content.anchors.windows(2).all(|w| w[0].1 < w[1].1));
        assert_eq!(content.anchors[0].1, 0);
    }

    #[test]
    fn test_unrevealed_rows_are_blank_but_counted() {
        let done = still();
        let mut fresh = AnimationState::with_rng(true, &mut StdRng::seed_from_u64(1));
        fresh.observe(&[PageSection::Hero]);
        fresh.tick();

        let full = PageContent::compose(
            &GuidePage::new(Theme::default(), None, &done).views(),
            80,
            &done,
        );
        let partial = PageContent::compose(
            &GuidePage::new(Theme::default(), None, &fresh).views(),
            80,
            &fresh,
        );
        assert_eq!(full.lines.len(), partial.lines.len());
        assert_eq!(full.anchors, partial.anchors);

        let comparison = partial.anchors[1].1;
        let footer = partial.anchors[3].1;
        assert!(lines_text(&partial.lines[comparison..footer])
            .iter()
            .all(|l| l.is_empty()));
    }

    #[test]
    fn test_render_records_size_and_anchors() {
        let anim = still();
        let mut state = PageViewState::new();
        let mut term = TestTerminal::new();
        term.draw_with(|frame| {
            let page = GuidePage::new(Theme::default(), Some(Platform::Windows), &anim);
            frame.render_stateful_widget(page, frame.area(), &mut state);
        });

        assert_eq!(state.visible_lines, 24);
        assert!(state.total_lines > 100);
        assert_eq!(state.anchors().len(), PageSection::ALL.len());
        assert!(term.buffer_contains("Learn Flutter Development"));
    }

    #[test]
    fn test_render_draws_offset_window() {
        let anim = still();
        let mut state = PageViewState::new();
        let mut term = TestTerminal::new();
        let draw = |term: &mut TestTerminal, state: &mut PageViewState| {
            term.draw_with(|frame| {
                let page = GuidePage::new(Theme::default(), Some(Platform::MacOs), &anim);
                frame.render_stateful_widget(page, frame.area(), state);
            });
        };

        draw(&mut term, &mut state);
        let install = state.anchor_of(PageSection::Installation).unwrap();
        state.scroll_to_row(install);
        draw(&mut term, &mut state);

        assert!(term.buffer_contains("Installation Steps for macOS"));
        assert!(!term.buffer_contains("Learn Flutter Development"));
    }

    #[test]
    fn test_content_is_centered_on_wide_terminals() {
        let area = Rect::new(0, 0, 200, 40);
        let content = GuidePage::content_area(area);
        assert_eq!(content.width, MAX_CONTENT_WIDTH);
        assert!(content.x > 40);
    }
}
