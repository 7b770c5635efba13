//! Section anchor navigation and the navigation menu

use fguide_core::PageSection;

/// Cursor of the navigation menu overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenuState {
    /// Index into [`PageSection::NAVIGABLE`]
    pub selected: usize,
}

impl NavMenuState {
    /// Entries in menu order
    pub fn entries() -> &'static [PageSection] {
        &PageSection::NAVIGABLE
    }

    pub fn selected_section(&self) -> PageSection {
        let entries = Self::entries();
        entries[self.selected.min(entries.len() - 1)]
    }

    pub fn move_up(&mut self) {
        let len = Self::entries().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % Self::entries().len();
    }

    /// Put the cursor on `section` if it is a menu entry
    pub fn highlight(&mut self, section: PageSection) {
        if let Some(i) = Self::entries().iter().position(|s| *s == section) {
            self.selected = i;
        }
    }
}

/// Navigation state owned by [`crate::AppState`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Section the last jump landed on; cleared by manual scrolling.
    ///
    /// Near the bottom of the page the scroll offset is clamped, so the
    /// section at the viewport top may differ from the one jumped to.
    pub focused: Option<PageSection>,
    pub menu: NavMenuState,
}

fn position(anchors: &[(PageSection, usize)], section: Option<PageSection>) -> Option<usize> {
    section.and_then(|s| anchors.iter().position(|(a, _)| *a == s))
}

/// Anchor after `from` in page order, wrapping to the first
pub fn next_anchor(
    anchors: &[(PageSection, usize)],
    from: Option<PageSection>,
) -> Option<(PageSection, usize)> {
    if anchors.is_empty() {
        return None;
    }
    let idx = match position(anchors, from) {
        Some(i) => (i + 1) % anchors.len(),
        None => 0,
    };
    Some(anchors[idx])
}

/// Anchor before `from` in page order, wrapping to the last
pub fn previous_anchor(
    anchors: &[(PageSection, usize)],
    from: Option<PageSection>,
) -> Option<(PageSection, usize)> {
    if anchors.is_empty() {
        return None;
    }
    let idx = match position(anchors, from) {
        Some(0) | None => anchors.len() - 1,
        Some(i) => i - 1,
    };
    Some(anchors[idx])
}
