//! Hero banner: title, typed subtitle, feature badges, call-to-actions,
//! the counter demo and a drifting particle field behind it all.

use fguide_app::animation::{AnimationState, Particle};
use fguide_core::site::{
    HERO_ACTIONS, HERO_COUNTER_LABEL, HERO_DEMO_TITLE, HERO_FEATURES, HERO_SUBTITLE, HERO_TITLE,
};
use fguide_core::PageSection;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::page::SectionView;
use super::text::{center_pad, centered, pad_to, truncate, width_of, wrap_words};
use crate::theme::{styles, Theme};

/// Keys bound to the call-to-actions, in [`HERO_ACTIONS`] order
const ACTION_KEYS: [char; 2] = ['s', 'f'];

const PHONE_MAX_WIDTH: usize = 40;

/// Ticks per half period of the typing cursor blink
const CURSOR_BLINK: u64 = 8;

enum Row {
    /// Empty row the particle field may draw on
    Backdrop,
    Content(Line<'static>),
}

pub struct Hero<'a> {
    theme: Theme,
    animation: &'a AnimationState,
}

impl<'a> Hero<'a> {
    pub fn new(theme: Theme, animation: &'a AnimationState) -> Self {
        Self { theme, animation }
    }

    fn title_rows(&self, width: usize) -> Vec<Row> {
        let style = styles::text_bright(self.theme.palette);
        wrap_words(HERO_TITLE, width.saturating_sub(4).max(1))
            .into_iter()
            .map(|row| Row::Content(centered(vec![Span::styled(row, style)], width)))
            .collect()
    }

    /// Subtitle typed so far, laid out on the rows of the full subtitle
    fn subtitle_rows(&self, width: usize) -> Vec<Row> {
        let p = self.theme.palette;
        let full = wrap_words(HERO_SUBTITLE, width.saturating_sub(4).max(1));
        let mut remaining = self.animation.typed_subtitle().chars().count();
        let show_cursor = !self.animation.typing_done()
            && (self.animation.frame() / CURSOR_BLINK) % 2 == 0;
        let mut cursor_drawn = false;

        let mut rows = Vec::with_capacity(full.len());
        for row in &full {
            let len = row.chars().count();
            let take = remaining.min(len);
            remaining = remaining.saturating_sub(len + 1);
            let typed: String = row.chars().take(take).collect();

            let mut spans = vec![
                Span::raw(center_pad(width_of(row), width)),
                Span::styled(typed, styles::accent(p)),
            ];
            if show_cursor && !cursor_drawn && take < len {
                spans.push(Span::styled("▌", styles::accent_bold(p)));
                cursor_drawn = true;
            }
            rows.push(Row::Content(Line::from(spans)));
        }
        rows
    }

    fn feature_rows(&self, width: usize) -> Vec<Row> {
        let p = self.theme.palette;
        HERO_FEATURES
            .iter()
            .map(|(badge, caption)| {
                let check = self.theme.icons.check();
                let text = truncate(
                    &format!("{badge} · {caption}"),
                    width.saturating_sub(width_of(check) + 3),
                );
                Row::Content(centered(
                    vec![
                        Span::styled(check.to_string(), styles::success(p)),
                        Span::raw(" "),
                        Span::styled(text, styles::text_primary(p)),
                    ],
                    width,
                ))
            })
            .collect()
    }

    fn action_rows(&self, width: usize) -> Vec<Row> {
        let p = self.theme.palette;
        let buttons: Vec<Span<'static>> = HERO_ACTIONS
            .iter()
            .zip(ACTION_KEYS)
            .enumerate()
            .map(|(i, ((label, _), key))| {
                let text = format!(" {label} ({key}) ");
                if i == 0 {
                    Span::styled(text, styles::pill(p))
                } else {
                    Span::styled(
                        text,
                        styles::accent_bold(p).add_modifier(Modifier::REVERSED),
                    )
                }
            })
            .collect();

        let total: usize = buttons.iter().map(|b| width_of(&b.content)).sum::<usize>() + 3;
        if total <= width {
            let mut spans = Vec::new();
            for (i, button) in buttons.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(button);
            }
            vec![Row::Content(centered(spans, width))]
        } else {
            buttons
                .into_iter()
                .map(|b| Row::Content(centered(vec![b], width)))
                .collect()
        }
    }

    /// The counter app as it looks running on a phone
    fn phone_rows(&self, width: usize) -> Vec<Row> {
        let p = self.theme.palette;
        let outer = PHONE_MAX_WIDTH.min(width.saturating_sub(2)).max(12);
        let inner = outer - 4;
        let pad = center_pad(outer, width);
        let frame = styles::border_active(p);
        let body = styles::text_primary(p);

        let boxed = |content: Vec<Span<'static>>| -> Row {
            let mut spans = vec![Span::raw(pad.clone()), Span::styled("│ ", frame)];
            spans.extend(content);
            spans.push(Span::styled(" │", frame));
            Row::Content(Line::from(spans))
        };

        let mut rows = vec![Row::Content(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(format!("╭{}╮", "─".repeat(outer - 2)), frame),
        ]))];
        rows.push(boxed(vec![Span::styled(
            pad_to(HERO_DEMO_TITLE, inner),
            styles::pill(p),
        )]));
        rows.push(boxed(vec![Span::raw(" ".repeat(inner))]));
        for label_row in wrap_words(HERO_COUNTER_LABEL, inner) {
            let centered_label =
                format!("{}{}", center_pad(width_of(&label_row), inner), label_row);
            rows.push(boxed(vec![Span::styled(pad_to(&centered_label, inner), body)]));
        }
        let count = self.animation.counter().to_string();
        let count_row = format!("{}{}", center_pad(count.len(), inner), count);
        rows.push(boxed(vec![Span::styled(
            pad_to(&count_row, inner),
            styles::text_bright(p),
        )]));
        rows.push(boxed(vec![
            Span::raw(" ".repeat(inner.saturating_sub(3))),
            Span::styled("(+)", styles::pill(p)),
        ]));
        rows.push(Row::Content(Line::from(vec![
            Span::raw(pad),
            Span::styled(format!("╰{}╯", "─".repeat(outer - 2)), frame),
        ])));
        rows
    }
}

/// Draw particles onto the backdrop rows
fn paint_backdrop(
    rows: Vec<Row>,
    particles: &[Particle],
    width: usize,
    style: Style,
) -> Vec<Line<'static>> {
    let backdrop: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| matches!(r, Row::Backdrop))
        .map(|(i, _)| i)
        .collect();

    let mut grid = vec![vec![' '; width]; backdrop.len()];
    if !backdrop.is_empty() && width > 0 {
        for particle in particles {
            let row = ((particle.y * backdrop.len() as f32) as usize).min(backdrop.len() - 1);
            let col = ((particle.x * width as f32) as usize).min(width - 1);
            grid[row][col] = particle.glyph;
        }
    }

    let mut painted = grid.into_iter();
    rows.into_iter()
        .map(|row| match row {
            Row::Content(line) => line,
            Row::Backdrop => {
                let cells: String = painted.next().unwrap_or_default().into_iter().collect();
                Line::from(Span::styled(cells.trim_end().to_string(), style))
            }
        })
        .collect()
}

impl SectionView for Hero<'_> {
    fn section(&self) -> PageSection {
        PageSection::Hero
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let mut rows = vec![Row::Backdrop, Row::Backdrop];
        rows.extend(self.title_rows(width));
        rows.push(Row::Backdrop);
        rows.extend(self.subtitle_rows(width));
        rows.push(Row::Backdrop);
        rows.extend(self.feature_rows(width));
        rows.push(Row::Backdrop);
        rows.extend(self.action_rows(width));
        rows.push(Row::Backdrop);
        rows.extend(self.phone_rows(width));
        rows.extend([Row::Backdrop, Row::Backdrop]);

        let style = Style::default().fg(self.theme.palette.accent);
        paint_backdrop(rows, self.animation.particles(), width, style)
    }
}
