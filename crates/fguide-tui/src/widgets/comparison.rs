//! Android Studio vs VS Code comparison table

use fguide_core::comparison::{
    ComparisonRow, Winner, COMPARISON_SUBTITLE, COMPARISON_TITLE, REFERENCE_IDE, TARGET_EDITOR,
};
use fguide_core::{comparison_table, PageSection, COMPARISON_VERDICT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{bullet, pad_to, section_heading};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;

pub struct Comparison {
    theme: Theme,
}

impl Comparison {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// `(feature, side)` column widths for a table of `width` cells
    fn columns(width: usize) -> (usize, usize) {
        let usable = width.saturating_sub(INDENT * 2);
        let feature = usable * 2 / 5;
        let side = usable.saturating_sub(feature) / 2;
        (feature, side)
    }

    fn value_cell(&self, value: &str, wins: bool, tie: bool, width: usize) -> Span<'static> {
        let p = self.theme.palette;
        if wins {
            let marked = format!("{} {value}", self.theme.icons.check());
            Span::styled(pad_to(&marked, width), styles::success(p))
        } else if tie {
            Span::styled(pad_to(value, width), styles::text_primary(p))
        } else {
            Span::styled(pad_to(value, width), styles::text_muted(p))
        }
    }

    fn row(&self, row: &ComparisonRow, feature_w: usize, side_w: usize) -> Line<'static> {
        let p = self.theme.palette;
        let tie = row.winner == Winner::Tie;
        let feature = format!("{} {}", self.theme.icons.metric(row.metric), row.feature);
        Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(pad_to(&feature, feature_w), styles::text_bright(p)),
            self.value_cell(
                row.reference_value,
                row.winner == Winner::Reference,
                tie,
                side_w,
            ),
            self.value_cell(row.target_value, row.winner == Winner::Target, tie, side_w),
        ])
    }
}

impl SectionView for Comparison {
    fn section(&self) -> PageSection {
        PageSection::Comparison
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let p = self.theme.palette;
        let (feature_w, side_w) = Self::columns(width);

        let mut lines = section_heading(COMPARISON_TITLE, COMPARISON_SUBTITLE, width, p);

        let header = styles::accent_bold(p);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(pad_to("Feature", feature_w), header),
            Span::styled(pad_to(REFERENCE_IDE, side_w), header),
            Span::styled(pad_to(TARGET_EDITOR, side_w), header),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(
                "─".repeat(feature_w + side_w * 2),
                styles::border_inactive(p),
            ),
        ]));
        for row in comparison_table() {
            lines.push(self.row(row, feature_w, side_w));
        }
        lines.push(Line::default());

        let bulb = Span::styled(self.theme.icons.lightbulb().to_string(), styles::warning(p));
        lines.extend(bullet(
            bulb,
            COMPARISON_VERDICT,
            width,
            INDENT,
            Style::default().fg(p.text_secondary),
        ));
        lines.push(Line::default());
        lines
    }
}
