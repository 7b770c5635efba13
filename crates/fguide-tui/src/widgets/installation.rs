//! Numbered installation steps for the selected platform

use fguide_core::install::{installation_subtitle, installation_title};
use fguide_core::{installation_steps, InstallStep, PageSection, Platform, INSTALLATION_NOTE};
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{code_block, paragraph, section_heading};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;
/// Description and command sit under the step title
const BODY_INDENT: usize = 7;

pub struct Installation {
    theme: Theme,
    platform: Option<Platform>,
}

impl Installation {
    pub fn new(theme: Theme, platform: Option<Platform>) -> Self {
        Self { theme, platform }
    }

    fn step(&self, number: usize, step: &InstallStep, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(format!(" {number} "), styles::pill(p)),
            Span::raw(" "),
            Span::styled(self.theme.icons.step(step.kind).to_string(), styles::accent(p)),
            Span::raw(" "),
            Span::styled(step.title.to_string(), styles::text_bright(p)),
        ])];
        lines.extend(paragraph(
            step.description,
            width,
            BODY_INDENT,
            styles::text_secondary(p),
        ));
        lines.extend(code_block(&[step.command], width, BODY_INDENT, p));
        lines.push(Line::default());
        lines
    }
}

impl SectionView for Installation {
    fn section(&self) -> PageSection {
        PageSection::Installation
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let Some(platform) = self.platform else {
            return Vec::new();
        };
        let width = usize::from(width);
        let p = self.theme.palette;

        let mut lines = section_heading(
            &installation_title(platform),
            &installation_subtitle(platform),
            width,
            p,
        );
        for (i, step) in installation_steps(platform).iter().enumerate() {
            lines.extend(self.step(i + 1, step, width));
        }

        lines.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(self.theme.icons.warning().to_string(), styles::warning(p)),
            Span::raw(" "),
            Span::styled("Important Note", styles::subheading(p)),
        ]));
        lines.extend(paragraph(
            INSTALLATION_NOTE,
            width,
            INDENT + 2,
            styles::text_secondary(p),
        ));
        lines.push(Line::default());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lines_contain, lines_text};
    use crate::widgets::text::width_of;

    #[test]
    fn test_hidden_gate_renders_nothing() {
        assert!(Installation::new(Theme::default(), None).lines(80).is_empty());
    }

    #[test]
    fn test_macos_commands_in_order() {
        let lines = Installation::new(Theme::default(), Some(Platform::MacOs)).lines(100);
        let text = lines_text(&lines);
        let pos = |needle: &str| text.iter().position(|l| l.contains(needle)).unwrap();

        assert!(lines_contain(&lines, "Installation Steps for macOS"));
        let brew = pos("$ brew install --cask flutter");
        let path = pos("$ export PATH=");
        let doctor = pos("$ flutter doctor");
        assert!(brew < path && path < doctor);
    }

    #[test]
    fn test_steps_are_numbered() {
        let lines = Installation::new(Theme::default(), Some(Platform::Windows)).lines(80);
        assert!(lines_contain(&lines, " 1  "));
        assert!(lines_contain(&lines, "Download Flutter SDK"));
        assert!(lines_contain(&lines, " 3  "));
        assert!(lines_contain(&lines, "Run Flutter Doctor"));
        assert!(lines_contain(&lines, "Important Note"));
    }

    #[test]
    fn test_long_command_wraps_within_width() {
        let lines = Installation::new(Theme::default(), Some(Platform::Linux)).lines(60);
        let text = lines_text(&lines);
        assert!(text.iter().any(|l| l.contains("$ wget https://")));
        assert!(text.iter().all(|l| width_of(l) <= 60));
    }
}
