//! Page footer: tagline, quick links, resources and credits

use fguide_core::site::{FOOTER_COPYRIGHT, FOOTER_CREDIT, FOOTER_TAGLINE};
use fguide_core::{LinkKind, PageSection, BRAND, LINKS};
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{centered, centered_paragraph, pad_to, subheading, truncate, width_of};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;
const LABEL_WIDTH: usize = 24;

pub struct Footer {
    theme: Theme,
}

impl Footer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn quick_links(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let labels: Vec<&str> = PageSection::NAVIGABLE
            .iter()
            .map(|s| s.nav_label())
            .collect();
        let mut lines = vec![subheading("Quick Links", INDENT, p)];
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(
                truncate(&labels.join(" · "), width.saturating_sub(INDENT)),
                styles::text_secondary(p),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled("press n to jump", styles::keybinding(p)),
        ]));
        lines.push(Line::default());
        lines
    }

    /// Links of `kind`, numbered as in the links overlay
    fn links(&self, heading: &str, kind: LinkKind, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading(heading, INDENT, p)];
        for (i, link) in LINKS.iter().enumerate().filter(|(_, l)| l.kind == kind) {
            let number = format!("[{}] ", i + 1);
            let used = INDENT + width_of(&number) + LABEL_WIDTH;
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(number, styles::keybinding(p)),
                Span::styled(pad_to(link.label, LABEL_WIDTH), styles::text_primary(p)),
                Span::styled(
                    truncate(link.url, width.saturating_sub(used)),
                    styles::text_muted(p),
                ),
            ]));
        }
        lines.push(Line::default());
        lines
    }
}

impl SectionView for Footer {
    fn section(&self) -> PageSection {
        PageSection::Footer
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let p = self.theme.palette;

        let mut lines = vec![
            Line::from(Span::styled("─".repeat(width), styles::border_inactive(p))),
            Line::default(),
            centered(
                vec![Span::styled(BRAND.to_string(), styles::accent_bold(p))],
                width,
            ),
        ];
        lines.extend(centered_paragraph(
            FOOTER_TAGLINE,
            width,
            styles::text_secondary(p),
        ));
        lines.push(Line::default());

        lines.extend(self.quick_links(width));
        lines.extend(self.links("Resources", LinkKind::Resource, width));
        lines.extend(self.links("Connect", LinkKind::Social, width));

        let credit = FOOTER_CREDIT.replace('♥', self.theme.icons.heart());
        lines.push(centered(
            vec![Span::styled(credit, styles::text_muted(p))],
            width,
        ));
        lines.push(centered(
            vec![Span::styled(FOOTER_COPYRIGHT.to_string(), styles::text_muted(p))],
            width,
        ));
        lines.push(Line::default());
        lines
    }
}
