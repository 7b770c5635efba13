//! Application state (Model in TEA pattern)

use fguide_core::{PageSection, Platform};

use crate::animation::AnimationState;
use crate::config::{Settings, ThemeMode};
use crate::navigation::NavigationState;
use crate::page_view_state::PageViewState;
use crate::selection::SelectionState;

/// Sections whose content depends on the selected platform
pub const PLATFORM_SECTIONS: [PageSection; 4] = [
    PageSection::Installation,
    PageSection::EditorSetup,
    PageSection::ProjectStructure,
    PageSection::FirstApp,
];

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Scrolling the page
    #[default]
    Normal,
    /// Navigation menu overlay open
    NavMenu,
    /// Outbound links overlay open
    Links,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub selection: SelectionState,
    pub page: PageViewState,
    pub navigation: NavigationState,
    pub animation: AnimationState,
    pub theme: ThemeMode,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            selection: SelectionState::new(settings.behavior.platform()),
            page: PageViewState::new(),
            navigation: NavigationState::default(),
            animation: AnimationState::new(settings.ui.animations),
            theme: settings.ui.theme,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Platform whose content is shown, `None` while the gate is closed
    pub fn revealed_platform(&self) -> Option<Platform> {
        self.selection.revealed_platform()
    }

    /// Whether a section is part of the page right now
    pub fn is_section_visible(&self, section: PageSection) -> bool {
        !section.is_gated() || self.selection.is_revealed()
    }

    /// Sections currently on the page, in page order
    pub fn page_sections(&self) -> Vec<PageSection> {
        PageSection::ALL
            .into_iter()
            .filter(|s| self.is_section_visible(*s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_hidden_and_running() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(state.selection.current_selection(), (Platform::Windows, false));
        assert!(!state.should_quit());
    }

    #[test]
    fn test_page_sections_hide_gated_until_revealed() {
        let mut state = AppState::new();
        assert_eq!(
            state.page_sections(),
            [
                PageSection::Hero,
                PageSection::Comparison,
                PageSection::Platforms,
                PageSection::Footer
            ]
        );

        state.selection.select_platform(Platform::Linux);
        assert_eq!(state.page_sections(), PageSection::ALL);
    }

    #[test]
    fn test_settings_seed_state() {
        let mut settings = Settings::default();
        settings.behavior.default_platform = "linux".into();
        settings.ui.theme = ThemeMode::Light;
        settings.ui.animations = false;

        let state = AppState::with_settings(settings);
        assert_eq!(state.selection.default_platform(), Platform::Linux);
        assert_eq!(state.theme, ThemeMode::Light);
        assert!(!state.animation.is_enabled());
    }

    #[test]
    fn test_platform_sections_are_the_gated_ones() {
        for section in PageSection::ALL {
            assert_eq!(section.is_gated(), PLATFORM_SECTIONS.contains(&section));
        }
    }
}
