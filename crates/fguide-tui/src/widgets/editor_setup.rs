//! VS Code setup: extensions, walkthrough and pro tips

use fguide_core::editor::{EDITOR_SETUP_SUBTITLE, EDITOR_SETUP_TITLE};
use fguide_core::{editor_extensions, editor_pro_tips, editor_setup_steps, PageSection, Platform};
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{bullet, code_block, paragraph, section_heading, subheading};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;

pub struct EditorSetup {
    theme: Theme,
    platform: Option<Platform>,
}

impl EditorSetup {
    pub fn new(theme: Theme, platform: Option<Platform>) -> Self {
        Self { theme, platform }
    }

    fn extensions(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading("Essential Extensions", INDENT, p), Line::default()];
        for ext in editor_extensions() {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(self.theme.icons.extension().to_string(), styles::accent(p)),
                Span::raw(" "),
                Span::styled(ext.name.to_string(), styles::text_bright(p)),
                Span::styled(format!("  {}", ext.identifier), styles::text_muted(p)),
            ]));
            lines.extend(paragraph(
                ext.description,
                width,
                INDENT + 2,
                styles::text_secondary(p),
            ));
            lines.extend(code_block(&[ext.install_command().as_str()], width, INDENT + 2, p));
            lines.push(Line::default());
        }
        lines
    }

    fn steps(&self, platform: Platform, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading("Setup Steps", INDENT, p), Line::default()];
        for (i, step) in editor_setup_steps(platform).iter().enumerate() {
            let number = Span::styled(format!("{}.", i + 1), styles::accent_bold(p));
            lines.extend(bullet(number, step, width, INDENT, styles::text_primary(p)));
        }
        lines.push(Line::default());
        lines
    }

    fn tips(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading("Pro Tips", INDENT, p), Line::default()];
        for tip in editor_pro_tips() {
            let bulb = Span::styled(self.theme.icons.lightbulb().to_string(), styles::warning(p));
            lines.extend(bullet(
                bulb,
                &format!("{}: {}", tip.title, tip.body),
                width,
                INDENT,
                styles::text_primary(p),
            ));
        }
        lines.push(Line::default());
        lines
    }
}

impl SectionView for EditorSetup {
    fn section(&self) -> PageSection {
        PageSection::EditorSetup
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let Some(platform) = self.platform else {
            return Vec::new();
        };
        let width = usize::from(width);
        let mut lines = section_heading(
            EDITOR_SETUP_TITLE,
            EDITOR_SETUP_SUBTITLE,
            width,
            self.theme.palette,
        );
        lines.extend(self.steps(platform, width));
        lines.extend(self.extensions(width));
        lines.extend(self.tips(width));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::lines_contain;

    #[test]
    fn test_hidden_gate_renders_nothing() {
        assert!(EditorSetup::new(Theme::default(), None).lines(80).is_empty());
    }

    #[test]
    fn test_shortcuts_follow_platform() {
        let mac = EditorSetup::new(Theme::default(), Some(Platform::MacOs)).lines(80);
        assert!(lines_contain(&mac, "Cmd+Shift+X"));
        assert!(!lines_contain(&mac, "Ctrl+Shift+X"));

        let linux = EditorSetup::new(Theme::default(), Some(Platform::Linux)).lines(80);
        assert!(lines_contain(&linux, "Ctrl+Shift+P"));
    }

    #[test]
    fn test_extensions_have_install_commands() {
        let lines = EditorSetup::new(Theme::default(), Some(Platform::Windows)).lines(90);
        for ext in editor_extensions() {
            assert!(lines_contain(&lines, ext.name));
            assert!(lines_contain(&lines, &format!("$ {}", ext.install_command())));
        }
        assert!(lines_contain(&lines, "Hot Reload:"));
    }
}
