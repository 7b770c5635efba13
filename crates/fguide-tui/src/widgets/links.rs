//! Outbound links overlay

use fguide_core::{LinkKind, LINKS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::open_modal;
use super::text::{pad_to, truncate};
use crate::theme::{styles, Theme};

const OVERLAY_WIDTH: u16 = 76;
const LABEL_WIDTH: usize = 24;

pub struct LinksOverlay {
    theme: Theme,
}

impl LinksOverlay {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let icons = self.theme.icons;
        let mut lines = Vec::new();
        for (heading, kind) in [("Resources", LinkKind::Resource), ("Connect", LinkKind::Social)] {
            lines.push(Line::from(Span::styled(
                format!(" {heading}"),
                styles::subheading(p),
            )));
            for (i, link) in LINKS.iter().enumerate().filter(|(_, l)| l.kind == kind) {
                let number = format!(" [{}] ", i + 1);
                let used = number.len() + LABEL_WIDTH + 2;
                lines.push(Line::from(vec![
                    Span::styled(number, styles::keybinding(p)),
                    Span::styled(
                        pad_to(&format!("{} {}", icons.link(), link.label), LABEL_WIDTH),
                        styles::text_bright(p),
                    ),
                    Span::styled(
                        truncate(link.url, width.saturating_sub(used)),
                        styles::text_muted(p),
                    ),
                ]));
            }
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!(" 1-{} open in browser  Esc close", LINKS.len()),
            styles::keybinding(p),
        )));
        lines
    }
}

impl Widget for LinksOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let width = OVERLAY_WIDTH.min(area.width.saturating_sub(4));
        let lines = self.lines(usize::from(width.saturating_sub(2)));
        let modal = open_modal(buf, area, width, lines.len() as u16 + 2, p);

        let block = styles::modal_block(p, " Links ".to_string());
        let inner = block.inner(modal);
        block.render(modal, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}
