//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn text_bright(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_bright)
        .add_modifier(Modifier::BOLD)
}

// --- Headings ---
pub fn section_title(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent_alt)
        .add_modifier(Modifier::BOLD)
}

pub fn subheading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_bright)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border_dim)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent_alt)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Button-like pill on the accent color
pub fn pill(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.danger)
}

pub fn warning(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Code ---
pub fn code(p: &Palette) -> Style {
    Style::default().fg(p.code_fg).bg(p.code_bg)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Selection styles ---
/// Focused and selected items across widgets
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent_alt)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block(p: &Palette, title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().bg(p.popup_bg).fg(p.text_primary))
}
