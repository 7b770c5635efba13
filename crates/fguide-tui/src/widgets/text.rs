//! Line-building helpers shared by the page sections.
//!
//! Sections produce owned `Line<'static>` values for a known width; all
//! measuring goes through `unicode-width` so wide glyphs line up.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::palette::Palette;
use crate::theme::styles;

/// Display width of a string in terminal cells
pub fn width_of(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word-wrap `text` into rows no wider than `width`.
///
/// Words longer than a row are split across rows.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = width_of(word);
        let sep = usize::from(!current.is_empty());
        if width_of(&current) + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if word_width <= width {
            current.push_str(word);
        } else {
            let mut pieces = split_at_width(word, width);
            current = pieces.pop().unwrap_or_default();
            rows.extend(pieces);
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Split `text` into chunks of at most `width` cells, keeping whitespace
pub fn split_at_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Cut `text` to `width` cells, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad (or truncate) `text` to exactly `width` cells
pub fn pad_to(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(width_of(&cut));
    format!("{cut}{}", " ".repeat(fill))
}

/// Left padding that centers content of `content_width` in `width`
pub fn center_pad(content_width: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(content_width) / 2)
}

/// A single centered line built from spans
pub fn centered(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let content: usize = spans.iter().map(|s| width_of(&s.content)).sum();
    let mut all = vec![Span::raw(center_pad(content, width))];
    all.extend(spans);
    Line::from(all)
}

/// Word-wrapped paragraph, every row prefixed with `indent` spaces
pub fn paragraph(text: &str, width: usize, indent: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_words(text, width.saturating_sub(indent))
        .into_iter()
        .map(|row| Line::from(vec![Span::raw(pad.clone()), Span::styled(row, style)]))
        .collect()
}

/// Word-wrapped paragraph with every row centered
pub fn centered_paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4).max(1);
    wrap_words(text, inner)
        .into_iter()
        .map(|row| centered(vec![Span::styled(row, style)], width))
        .collect()
}

/// Item with a leading marker; continuation rows align under the text
pub fn bullet(
    marker: Span<'static>,
    text: &str,
    width: usize,
    indent: usize,
    style: Style,
) -> Vec<Line<'static>> {
    let marker_width = width_of(&marker.content) + 1;
    let hang = " ".repeat(indent + marker_width);
    let rows = wrap_words(text, width.saturating_sub(indent + marker_width));
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            if i == 0 {
                Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    marker.clone(),
                    Span::raw(" "),
                    Span::styled(row, style),
                ])
            } else {
                Line::from(vec![Span::raw(hang.clone()), Span::styled(row, style)])
            }
        })
        .collect()
}

/// Centered section title and subtitle followed by a blank row
pub fn section_heading(
    title: &str,
    subtitle: &str,
    width: usize,
    p: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    lines.extend(
        wrap_words(title, width.saturating_sub(4).max(1))
            .into_iter()
            .map(|row| centered(vec![Span::styled(row, styles::section_title(p))], width)),
    );
    let rule_width = width_of(title).min(width.saturating_sub(4));
    lines.push(centered(
        vec![Span::styled("─".repeat(rule_width), styles::accent(p))],
        width,
    ));
    lines.extend(centered_paragraph(subtitle, width, styles::text_secondary(p)));
    lines.push(Line::default());
    lines
}

/// Left-aligned sub heading inside a section
pub fn subheading(text: &str, indent: usize, p: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(text.to_string(), styles::subheading(p)),
    ])
}

/// Shell commands in a code panel, long commands split across rows
pub fn code_block(
    commands: &[&str],
    width: usize,
    indent: usize,
    p: &Palette,
) -> Vec<Line<'static>> {
    let style = styles::code(p);
    let inner = width.saturating_sub(indent + 4).max(1);
    let mut lines = Vec::new();
    for command in commands {
        for (i, row) in split_at_width(command, inner).into_iter().enumerate() {
            let prompt = if i == 0 { "$ " } else { "  " };
            let body = pad_to(&format!("{prompt}{row}"), inner + 2);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(format!(" {body} "), style),
            ]));
        }
    }
    lines
}

/// Source listing with line numbers in a code panel
pub fn source_block(source: &str, width: usize, indent: usize, p: &Palette) -> Vec<Line<'static>> {
    let code = styles::code(p);
    let gutter = Style::default().fg(p.text_muted).bg(p.code_bg);
    let inner = width.saturating_sub(indent + 7).max(1);
    let mut lines = Vec::new();
    for (n, src) in source.lines().enumerate() {
        for (i, row) in split_at_width(src, inner).into_iter().enumerate() {
            let number = if i == 0 {
                format!("{:>3} ", n + 1)
            } else {
                "    ".to_string()
            };
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(format!(" {number}"), gutter),
                Span::styled(format!("{} ", pad_to(&row, inner)), code),
            ]));
        }
    }
    lines
}
