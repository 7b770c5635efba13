//! Centralized theme system.
//!
//! This module provides:
//! - `palette` — Dark and light color palettes
//! - `styles` — Semantic style builder functions
//! - `icons` — Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

use fguide_app::config::{IconMode, ThemeMode};
use fguide_app::AppState;

use icons::IconSet;
use palette::Palette;

/// Everything a widget needs to pick colors and glyphs
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: &'static Palette,
    pub icons: IconSet,
}

impl Theme {
    pub fn new(mode: ThemeMode, icons: IconMode) -> Self {
        Self {
            palette: Palette::for_mode(mode),
            icons: IconSet::new(icons),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.theme, state.settings.ui.icons)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default(), IconMode::default())
    }
}
