//! Color palettes for the dark and light themes.

use fguide_app::config::ThemeMode;
use ratatui::style::Color;

/// One complete set of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,
    pub code_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    /// Flutter blue
    pub accent: Color,
    /// Flutter sky blue, used for highlights and gradients
    pub accent_alt: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,
    /// Foreground on accent backgrounds
    pub contrast_fg: Color,
    pub code_fg: Color,

    // --- Status ---
    pub success: Color,
    pub danger: Color,
    pub warning: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    code_bg: Color::Rgb(22, 27, 34),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(19, 185, 253),
    accent: Color::Rgb(2, 125, 253),
    accent_alt: Color::Rgb(19, 185, 253),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(139, 148, 158),
    text_muted: Color::Rgb(92, 99, 110),
    text_bright: Color::Rgb(240, 246, 252),
    contrast_fg: Color::Rgb(10, 12, 16),
    code_fg: Color::Rgb(126, 231, 135),
    success: Color::Rgb(16, 185, 129),
    danger: Color::Rgb(244, 63, 94),
    warning: Color::Rgb(234, 179, 8),
    shadow: Color::Rgb(5, 6, 8),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(248, 250, 252),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(241, 245, 249),
    code_bg: Color::Rgb(30, 41, 59),
    border_dim: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(2, 86, 155),
    accent: Color::Rgb(2, 86, 155),
    accent_alt: Color::Rgb(1, 117, 194),
    text_primary: Color::Rgb(30, 41, 59),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),
    text_bright: Color::Rgb(15, 23, 42),
    contrast_fg: Color::Rgb(255, 255, 255),
    code_fg: Color::Rgb(134, 239, 172),
    success: Color::Rgb(5, 150, 105),
    danger: Color::Rgb(225, 29, 72),
    warning: Color::Rgb(202, 138, 4),
    shadow: Color::Rgb(203, 213, 225),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}
