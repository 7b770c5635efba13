//! Platform selection handlers

use crate::selection::SelectionChange;
use crate::state::{AppState, PLATFORM_SECTIONS};
use fguide_core::prelude::*;
use fguide_core::Platform;

use super::UpdateResult;

/// Run the selector's auto-select, unless configuration turned it off
pub fn handle_mount(state: &mut AppState) -> UpdateResult {
    if !state.settings.behavior.auto_select {
        debug!("Auto-select disabled; waiting for an explicit platform choice");
        return UpdateResult::none();
    }
    let change = state.selection.mount();
    apply_change(state, change)
}

pub fn handle_select(state: &mut AppState, platform: Platform) -> UpdateResult {
    let change = state.selection.select_platform(platform);
    apply_change(state, change)
}

fn apply_change(state: &mut AppState, change: SelectionChange) -> UpdateResult {
    match change {
        SelectionChange::Revealed(platform) => {
            info!("Platform {} selected, instructions revealed", platform);
        }
        SelectionChange::Switched { from, to } => {
            info!("Platform switched from {} to {}", from, to);
            state.animation.restart(&PLATFORM_SECTIONS);
        }
        SelectionChange::Unchanged => {
            trace!("Platform selection unchanged");
        }
    }
    UpdateResult::none()
}
