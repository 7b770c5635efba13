//! Page view state - scroll position, viewport bounds and section anchors.
//!
//! Shared by the handler layer (scroll and jump commands) and the TUI layer,
//! which records content size and anchors on every render.

use fguide_core::PageSection;

/// Scroll state of the single page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of rendered lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Start row of every rendered section, in page order (set during render)
    anchors: Vec<(PageSection, usize)>,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Put `row` at the top of the viewport, clamped to the scroll range
    pub fn scroll_to_row(&mut self, row: usize) {
        self.offset = row.min(self.max_offset());
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Replace the anchor table. Anchors must be in ascending row order.
    pub fn set_anchors(&mut self, anchors: Vec<(PageSection, usize)>) {
        debug_assert!(anchors.windows(2).all(|w| w[0].1 <= w[1].1));
        self.anchors = anchors;
    }

    pub fn anchors(&self) -> &[(PageSection, usize)] {
        &self.anchors
    }

    /// Start row of a rendered section
    pub fn anchor_of(&self, section: PageSection) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|&(_, row)| row)
    }

    /// Section containing the top row of the viewport
    pub fn current_section(&self) -> Option<PageSection> {
        self.anchors
            .iter()
            .take_while(|(_, row)| *row <= self.offset)
            .last()
            .map(|&(s, _)| s)
    }

    /// Sections overlapping the viewport, in page order
    pub fn visible_sections(&self) -> Vec<PageSection> {
        let top = self.offset;
        let bottom = self.offset + self.visible_lines;
        self.anchors
            .iter()
            .enumerate()
            .filter(|&(i, &(_, start))| {
                let end = self
                    .anchors
                    .get(i + 1)
                    .map(|&(_, next)| next)
                    .unwrap_or(self.total_lines.max(start + 1));
                start < bottom && end > top
            })
            .map(|(_, &(s, _))| s)
            .collect()
    }
}
