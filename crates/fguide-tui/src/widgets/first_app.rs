//! The sample counter app: create, full source, run targets, phone setup

use fguide_core::sample_app::{FIRST_APP_SUBTITLE, FIRST_APP_TITLE};
use fguide_core::{
    run_targets, PageSection, Platform, COUNTER_APP_SOURCE, CREATE_COMMANDS, PHONE_SETUP_STEPS,
};
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{code_block, paragraph, section_heading, source_block, subheading};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;

pub struct FirstApp {
    theme: Theme,
    platform: Option<Platform>,
}

impl FirstApp {
    pub fn new(theme: Theme, platform: Option<Platform>) -> Self {
        Self { theme, platform }
    }

    fn create(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![
            Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(self.theme.icons.play().to_string(), styles::accent(p)),
                Span::raw(" "),
                Span::styled("Create New Project", styles::subheading(p)),
            ]),
            Line::default(),
        ];
        lines.extend(code_block(&CREATE_COMMANDS, width, INDENT, p));
        lines.push(Line::default());
        lines
    }

    fn source(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![
            Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled("Complete Counter App Code", styles::subheading(p)),
                Span::styled("  lib/main.dart", styles::text_muted(p)),
            ]),
            Line::default(),
        ];
        lines.extend(source_block(COUNTER_APP_SOURCE, width, INDENT, p));
        lines.push(Line::default());
        lines
    }

    fn run(&self, platform: Platform, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading("Run Your App", INDENT, p), Line::default()];
        for target in run_targets(platform) {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(
                    self.theme.icons.device(target.device).to_string(),
                    styles::accent(p),
                ),
                Span::raw(" "),
                Span::styled(target.label, styles::text_bright(p)),
            ]));
            lines.extend(code_block(&[target.command.as_str()], width, INDENT + 2, p));
        }
        lines.push(Line::default());
        lines
    }

    fn phone(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![
            subheading("Connect Your Android Phone", INDENT, p),
            Line::default(),
        ];
        for (i, (heading, detail)) in PHONE_SETUP_STEPS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(format!(" {} ", i + 1), styles::pill(p)),
                Span::raw(" "),
                Span::styled(heading.to_string(), styles::text_bright(p)),
            ]));
            lines.extend(paragraph(detail, width, INDENT + 4, styles::text_secondary(p)));
        }
        lines.push(Line::default());
        lines
    }
}

impl SectionView for FirstApp {
    fn section(&self) -> PageSection {
        PageSection::FirstApp
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let Some(platform) = self.platform else {
            return Vec::new();
        };
        let width = usize::from(width);
        let mut lines = section_heading(
            FIRST_APP_TITLE,
            FIRST_APP_SUBTITLE,
            width,
            self.theme.palette,
        );
        lines.extend(self.create(width));
        lines.extend(self.source(width));
        lines.extend(self.run(platform, width));
        lines.extend(self.phone(width));
        lines
    }
}
