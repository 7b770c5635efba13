//! Configuration types for Flutter Guide
//!
//! Every key is optional; a missing key takes the value shown in
//! [`DEFAULT_CONFIG`](super::settings::DEFAULT_CONFIG).

use fguide_core::prelude::*;
use fguide_core::Platform;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub links: LinkSettings,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Platform the selector starts on (windows, macos or linux)
    #[serde(default = "default_platform")]
    pub default_platform: String,

    /// Select the default platform as soon as the page appears
    #[serde(default = "default_true")]
    pub auto_select: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_platform: default_platform(),
            auto_select: true,
        }
    }
}

impl BehaviorSettings {
    /// Parsed `default_platform`; unknown ids fall back to Windows
    pub fn platform(&self) -> Platform {
        match self.default_platform.parse() {
            Ok(platform) => platform,
            Err(e) => {
                warn!("{e}; using {}", Platform::default());
                Platform::default()
            }
        }
    }
}

fn default_platform() -> String {
    Platform::default().id().to_string()
}

fn default_true() -> bool {
    true
}

/// Colour scheme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

/// Icon rendering mode.
///
/// Controls whether the UI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: ThemeMode,

    /// Decorative animation (reveals, typing, particles)
    #[serde(default = "default_true")]
    pub animations: bool,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            animations: true,
            icons: IconMode::default(),
        }
    }
}

/// Outbound link settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Browser command; empty uses the platform opener
    #[serde(default)]
    pub browser: String,
}

/// Values given on the command line, applied over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub platform: Option<Platform>,
    pub theme: Option<ThemeMode>,
    pub no_animations: bool,
}

impl Settings {
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(platform) = overrides.platform {
            self.behavior.default_platform = platform.id().to_string();
        }
        if let Some(theme) = overrides.theme {
            self.ui.theme = theme;
        }
        if overrides.no_animations {
            self.ui.animations = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.behavior.platform(), Platform::Windows);
        assert!(settings.behavior.auto_select);
        assert_eq!(settings.ui.theme, ThemeMode::Dark);
        assert!(settings.ui.animations);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.links.browser.is_empty());
    }

    #[test]
    fn test_unknown_platform_falls_back_to_windows() {
        let behavior = BehaviorSettings {
            default_platform: "beos".to_string(),
            auto_select: true,
        };
        assert_eq!(behavior.platform(), Platform::Windows);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut settings = Settings::default();
        settings.apply(&Overrides {
            platform: Some(Platform::Linux),
            theme: Some(ThemeMode::Light),
            no_animations: true,
        });
        assert_eq!(settings.behavior.platform(), Platform::Linux);
        assert_eq!(settings.ui.theme, ThemeMode::Light);
        assert!(!settings.ui.animations);
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut settings = Settings::default();
        settings.apply(&Overrides::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
