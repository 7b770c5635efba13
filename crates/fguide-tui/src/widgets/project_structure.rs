//! Flutter project layout: directory tree, key locations and tips

use fguide_core::project::{
    flatten_tree, NodeKind, TreeNode, PROJECT_STRUCTURE_SUBTITLE, PROJECT_STRUCTURE_TITLE,
};
use fguide_core::{key_locations, organization_tips, project_tree, PageSection, Platform};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{bullet, pad_to, paragraph, section_heading, subheading, truncate, width_of};
use crate::theme::{styles, Theme};

const INDENT: usize = 2;
/// Tree names are padded to this many cells before the description
const NAME_COLUMN: usize = 26;

pub struct ProjectStructure {
    theme: Theme,
    platform: Option<Platform>,
}

impl ProjectStructure {
    pub fn new(theme: Theme, platform: Option<Platform>) -> Self {
        Self { theme, platform }
    }

    fn node(&self, depth: usize, node: &TreeNode, width: usize) -> Line<'static> {
        let p = self.theme.palette;
        let icon = match node.kind {
            NodeKind::Folder => self.theme.icons.folder(),
            NodeKind::File => self.theme.icons.file(),
        };
        let current = node.platform.is_some() && node.platform == self.platform;

        let mut name_style = if node.important {
            styles::success(p).add_modifier(Modifier::BOLD)
        } else if node.is_folder() {
            styles::accent(p)
        } else {
            styles::text_primary(p)
        };
        if current {
            name_style = styles::focused_selected(p);
        }

        let lead = format!("{}{}{} ", " ".repeat(INDENT), "  ".repeat(depth), icon);
        let name_width = NAME_COLUMN.saturating_sub(depth * 2);
        let used = width_of(&lead) + name_width;
        let description = truncate(node.description, width.saturating_sub(used + 1));

        Line::from(vec![
            Span::styled(lead, styles::text_muted(p)),
            Span::styled(pad_to(node.name, name_width), name_style),
            Span::raw(" "),
            Span::styled(description, styles::text_secondary(p)),
        ])
    }

    fn tree(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading("Project Root Structure", INDENT, p), Line::default()];
        lines.extend(
            flatten_tree(project_tree())
                .into_iter()
                .map(|(depth, node)| self.node(depth, node, width)),
        );
        lines.push(Line::default());
        lines
    }

    fn locations(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![subheading("Key Development Locations", INDENT, p), Line::default()];
        for location in key_locations() {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(location.path.to_string(), styles::code(p)),
            ]));
            lines.extend(paragraph(
                location.description,
                width,
                INDENT + 2,
                styles::text_primary(p),
            ));
            lines.extend(paragraph(
                &format!("e.g. {}", location.usage),
                width,
                INDENT + 2,
                styles::text_muted(p),
            ));
        }
        lines.push(Line::default());
        lines
    }

    fn tips(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![
            subheading("Pro Tips for Project Organization", INDENT, p),
            Line::default(),
        ];
        for tip in organization_tips() {
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

impl SectionView for ProjectStructure {
    fn section(&self) -> PageSection {
        PageSection::ProjectStructure
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        if self.platform.is_none() {
            return Vec::new();
        }
        let width = usize::from(width);
        let mut lines = section_heading(
            PROJECT_STRUCTURE_TITLE,
            PROJECT_STRUCTURE_SUBTITLE,
            width,
            self.theme.palette,
        );
        lines.extend(self.tree(width));
        lines.extend(self.locations(width));
        lines.extend(self.tips(width));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lines_contain, lines_text};

    #[test]
    fn test_tree_lists_nested_entries() {
        let lines = ProjectStructure::new(Theme::default(), Some(Platform::Windows)).lines(90);
        let text = lines_text(&lines);
        let lib = text.iter().position(|l| l.contains("lib/")).unwrap();
        assert!(text[lib + 1].contains("main.dart"));
        assert!(lines_contain(&lines, "pubspec.yaml"));
        assert!(lines_contain(&lines, "Key Development Locations"));
        assert!(lines_contain(&lines, "/lib/main.dart"));
    }

    #[test]
    fn test_selected_platform_folder_is_highlighted() {
        let theme = Theme::default();
        let lines = ProjectStructure::new(theme, Some(Platform::Linux)).lines(90);
        let highlight = styles::focused_selected(theme.palette);
        let styled: Vec<String> = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.style == highlight)
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(styled, ["linux/"]);
    }

    #[test]
    fn test_hidden_gate_renders_nothing() {
        assert!(ProjectStructure::new(Theme::default(), None).lines(80).is_empty());
    }

    #[test]
    fn test_rows_fit_width() {
        let lines = ProjectStructure::new(Theme::default(), Some(Platform::MacOs)).lines(50);
        assert!(lines_text(&lines).iter().all(|l| width_of(l) <= 50));
    }
}
