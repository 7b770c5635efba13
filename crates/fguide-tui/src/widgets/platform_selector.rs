//! Platform selector with system requirements and the quick-step overview

use fguide_core::platform::{PLATFORMS_SUBTITLE, PLATFORMS_TITLE};
use fguide_core::{PageSection, Platform, QUICK_INSTALL_OVERVIEW};
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{
    bullet, centered, centered_paragraph, pad_to, paragraph, section_heading, subheading,
    width_of,
};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;
const LABEL_WIDTH: usize = 18;

/// Shown under the buttons until a platform has been picked
const CHOOSE_PROMPT: &str =
    "Press 1, 2 or 3 to pick your platform and show the guide, or \u{2190}/\u{2192} to cycle";

pub struct PlatformSelector {
    theme: Theme,
    current: Platform,
    awaiting_choice: bool,
}

impl PlatformSelector {
    /// `current` is highlighted and its requirements are listed
    pub fn new(theme: Theme, current: Platform) -> Self {
        Self {
            theme,
            current,
            awaiting_choice: false,
        }
    }

    /// Prompt for a choice while the instructional sections are hidden
    pub fn awaiting_choice(mut self, awaiting: bool) -> Self {
        self.awaiting_choice = awaiting;
        self
    }

    /// One button per platform, the selected one highlighted and marked
    fn buttons(&self) -> Vec<Span<'static>> {
        let p = self.theme.palette;
        let icons = self.theme.icons;
        Platform::ALL
            .iter()
            .enumerate()
            .map(|(i, platform)| {
                let selected = self.current == *platform;
                let marker = if selected { icons.dot() } else { icons.circle() };
                let text = format!(
                    " {marker} [{}] {} {} ",
                    i + 1,
                    icons.platform(*platform),
                    platform.label()
                );
                if selected {
                    Span::styled(text, styles::focused_selected(p))
                } else {
                    Span::styled(text, styles::text_secondary(p))
                }
            })
            .collect()
    }

    fn button_rows(&self, width: usize) -> Vec<Line<'static>> {
        let buttons = self.buttons();
        let total: usize = buttons.iter().map(|b| width_of(&b.content)).sum::<usize>()
            + 2 * (buttons.len() - 1);
        if total <= width {
            let mut spans = Vec::new();
            for (i, button) in buttons.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(button);
            }
            vec![centered(spans, width)]
        } else {
            buttons
                .into_iter()
                .map(|b| centered(vec![b], width))
                .collect()
        }
    }

    fn details(&self, platform: Platform, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading(
            &format!("System Requirements for {}", platform.label()),
            INDENT,
            p,
        )];
        lines.push(Line::default());

        let value_width = width.saturating_sub(INDENT + LABEL_WIDTH);
        for (label, value) in platform.requirements().rows() {
            let rows = paragraph(value, value_width, 0, styles::text_primary(p));
            for (i, row) in rows.into_iter().enumerate() {
                let head = if i == 0 { label } else { "" };
                let mut spans = vec![
                    Span::raw(" ".repeat(INDENT)),
                    Span::styled(pad_to(head, LABEL_WIDTH), styles::accent(p)),
                ];
                spans.extend(row.spans);
                lines.push(Line::from(spans));
            }
        }
        lines.push(Line::default());

        lines.push(subheading("Quick Installation Steps:", INDENT, p));
        lines.push(Line::default());
        for (i, step) in QUICK_INSTALL_OVERVIEW.iter().enumerate() {
            let number = Span::styled(format!("{}.", i + 1), styles::accent_bold(p));
            lines.extend(bullet(number, step, width, INDENT, styles::text_primary(p)));
        }
        lines
    }
}

impl SectionView for PlatformSelector {
    fn section(&self) -> PageSection {
        PageSection::Platforms
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let p = self.theme.palette;

        let mut lines = section_heading(PLATFORMS_TITLE, PLATFORMS_SUBTITLE, width, p);
        lines.extend(self.button_rows(width));
        if self.awaiting_choice {
            lines.push(Line::default());
            lines.extend(centered_paragraph(CHOOSE_PROMPT, width, styles::keybinding(p)));
        }
        lines.push(Line::default());
        lines.extend(self.details(self.current, width));
        lines.push(Line::default());
        lines
    }
}
