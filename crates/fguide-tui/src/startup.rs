//! Startup for the TUI runner
//!
//! Mounts the page: the selection controller gets its one chance to
//! auto-select the configured platform before the first frame is drawn.

use fguide_app::message::Message;
use fguide_app::{process, AppState};
use tracing::info;

/// Outcome of [`startup_guide`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupAction {
    /// Platform instructions are already on the page
    Revealed,
    /// Waiting for the user to pick a platform
    AwaitingSelection,
}

/// Mount the page and report whether the platform sections are showing
pub fn startup_guide(state: &mut AppState) -> StartupAction {
    process::process_message(state, Message::Mount);

    match state.revealed_platform() {
        Some(platform) => {
            info!("Started with {} instructions revealed", platform);
            StartupAction::Revealed
        }
        None => {
            info!("Started without a platform; waiting for selection");
            StartupAction::AwaitingSelection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fguide_app::config::Settings;
    use fguide_core::Platform;

    #[test]
    fn test_startup_auto_selects_default_platform() {
        let mut settings = Settings::default();
        settings.behavior.default_platform = "macos".into();
        let mut state = AppState::with_settings(settings);

        assert_eq!(startup_guide(&mut state), StartupAction::Revealed);
        assert_eq!(state.revealed_platform(), Some(Platform::MacOs));
    }

    #[test]
    fn test_startup_without_auto_select_keeps_gate_closed() {
        let mut settings = Settings::default();
        settings.behavior.auto_select = false;
        let mut state = AppState::with_settings(settings);

        assert_eq!(startup_guide(&mut state), StartupAction::AwaitingSelection);
        assert_eq!(state.revealed_platform(), None);
    }
}
