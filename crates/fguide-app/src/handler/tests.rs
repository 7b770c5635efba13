//! Tests for the update function and key mapping

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::process::run_update;
use crate::state::{AppPhase, AppState, UiMode};
use fguide_core::{PageSection, Platform, LINKS};

fn test_state() -> AppState {
    AppState::new()
}

fn revealed_state() -> AppState {
    let mut state = test_state();
    update(&mut state, Message::Mount);
    with_layout(&mut state);
    state
}

/// Stand-in for what the renderer records on each frame
fn with_layout(state: &mut AppState) {
    let mut anchors = vec![
        (PageSection::Hero, 0),
        (PageSection::Comparison, 40),
        (PageSection::Platforms, 80),
    ];
    let mut row = 120;
    if state.selection.is_revealed() {
        for section in [
            PageSection::Installation,
            PageSection::EditorSetup,
            PageSection::ProjectStructure,
            PageSection::FirstApp,
        ] {
            anchors.push((section, row));
            row += 60;
        }
    }
    anchors.push((PageSection::Footer, row));
    state.page.update_content_size(row + 20, 30);
    state.page.set_anchors(anchors);
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_mount_reveals_windows() {
    let mut state = test_state();
    update(&mut state, Message::Mount);
    assert_eq!(
        state.selection.current_selection(),
        (Platform::Windows, true)
    );
}

#[test]
fn test_mount_respects_auto_select_off() {
    let mut settings = Settings::default();
    settings.behavior.auto_select = false;
    let mut state = AppState::with_settings(settings);

    update(&mut state, Message::Mount);
    assert_eq!(
        state.selection.current_selection(),
        (Platform::Windows, false)
    );

    update(&mut state, Message::SelectPlatform(Platform::MacOs));
    assert_eq!(state.selection.current_selection(), (Platform::MacOs, true));
}

#[test]
fn test_select_platform_message() {
    for platform in Platform::ALL {
        let mut state = test_state();
        update(&mut state, Message::SelectPlatform(platform));
        assert_eq!(state.selection.current_selection(), (platform, true));
    }
}

#[test]
fn test_next_and_previous_platform_cycle() {
    let mut state = revealed_state();
    update(&mut state, Message::NextPlatform);
    assert_eq!(state.selection.platform(), Platform::MacOs);
    update(&mut state, Message::NextPlatform);
    update(&mut state, Message::NextPlatform);
    assert_eq!(state.selection.platform(), Platform::Windows);
    update(&mut state, Message::PreviousPlatform);
    assert_eq!(state.selection.platform(), Platform::Linux);
}

#[test]
fn test_next_platform_while_hidden_reveals() {
    let mut state = test_state();
    update(&mut state, Message::NextPlatform);
    assert_eq!(state.selection.current_selection(), (Platform::MacOs, true));
}

#[test]
fn test_switch_restarts_platform_section_reveal() {
    let mut state = revealed_state();
    state.animation.observe(&[PageSection::Installation, PageSection::Hero]);
    update(&mut state, Message::Tick);

    update(&mut state, Message::SelectPlatform(Platform::Linux));
    assert!(!state.animation.has_seen(PageSection::Installation));
    assert!(state.animation.has_seen(PageSection::Hero));
}

#[test]
fn test_reselect_keeps_reveal_progress() {
    let mut state = revealed_state();
    state.animation.observe(&[PageSection::Installation]);
    update(&mut state, Message::SelectPlatform(Platform::Windows));
    assert!(state.animation.has_seen(PageSection::Installation));
}

#[test]
fn test_selection_identical_with_or_without_animations() {
    let run = |animations: bool| {
        let mut settings = Settings::default();
        settings.ui.animations = animations;
        let mut state = AppState::with_settings(settings);
        for msg in [
            Message::Mount,
            Message::Tick,
            Message::SelectPlatform(Platform::Linux),
            Message::ToggleAnimations,
            Message::NextPlatform,
            Message::Tick,
        ] {
            update(&mut state, msg);
        }
        state.selection
    };
    assert_eq!(run(true), run(false));
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_normal_mode_key_mapping() {
    let state = test_state();
    let cases = [
        (InputKey::Char('q'), Message::Quit),
        (InputKey::Esc, Message::Quit),
        (InputKey::CharCtrl('c'), Message::Quit),
        (InputKey::Char('1'), Message::SelectPlatform(Platform::Windows)),
        (InputKey::Char('2'), Message::SelectPlatform(Platform::MacOs)),
        (InputKey::Char('3'), Message::SelectPlatform(Platform::Linux)),
        (InputKey::Left, Message::PreviousPlatform),
        (InputKey::Char('h'), Message::PreviousPlatform),
        (InputKey::Right, Message::NextPlatform),
        (InputKey::Char('l'), Message::NextPlatform),
        (InputKey::Up, Message::ScrollUp),
        (InputKey::Char('k'), Message::ScrollUp),
        (InputKey::Down, Message::ScrollDown),
        (InputKey::Char('j'), Message::ScrollDown),
        (InputKey::PageUp, Message::PageUp),
        (InputKey::PageDown, Message::PageDown),
        (InputKey::Home, Message::ScrollToTop),
        (InputKey::Char('g'), Message::ScrollToTop),
        (InputKey::End, Message::ScrollToBottom),
        (InputKey::Char('G'), Message::ScrollToBottom),
        (InputKey::Tab, Message::NextSection),
        (InputKey::BackTab, Message::PreviousSection),
        (InputKey::Char('n'), Message::ToggleNavMenu),
        (InputKey::Char('s'), Message::JumpTo(PageSection::Platforms)),
        (InputKey::Char('f'), Message::JumpTo(PageSection::FirstApp)),
        (InputKey::Char('o'), Message::ShowLinks),
        (InputKey::Char('t'), Message::ToggleTheme),
        (InputKey::Char('a'), Message::ToggleAnimations),
    ];
    for (key, expected) in cases {
        assert_eq!(handle_key(&state, key), Some(expected), "key {key:?}");
    }
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
    assert_eq!(handle_key(&state, InputKey::Char('4')), None);
}

#[test]
fn test_nav_menu_key_mapping() {
    let mut state = test_state();
    state.ui_mode = UiMode::NavMenu;
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::NavMenuUp));
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::NavMenuDown));
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::NavMenuConfirm)
    );
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::CloseNavMenu));
    assert_eq!(
        handle_key(&state, InputKey::Char('n')),
        Some(Message::CloseNavMenu)
    );
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
    // q does not quit from inside the menu
    assert_eq!(handle_key(&state, InputKey::Char('q')), None);
}

#[test]
fn test_links_key_mapping() {
    let mut state = test_state();
    state.ui_mode = UiMode::Links;
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::OpenLink(0))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('6')),
        Some(Message::OpenLink(5))
    );
    // Only LINKS.len() entries are numbered
    assert_eq!(handle_key(&state, InputKey::Char('9')), None);
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::CloseLinks));
}

#[test]
fn test_key_message_flows_through_update() {
    let mut state = test_state();
    let actions = run_update(&mut state, Message::Key(InputKey::Char('3')));
    assert!(actions.is_empty());
    assert_eq!(state.selection.current_selection(), (Platform::Linux, true));
}

#[test]
fn test_quit() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Scrolling and navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_messages_move_page() {
    let mut state = revealed_state();
    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::ScrollDown);
    assert_eq!(state.page.offset, 2);
    update(&mut state, Message::ScrollUp);
    assert_eq!(state.page.offset, 1);
    update(&mut state, Message::ScrollToBottom);
    assert_eq!(state.page.offset, state.page.total_lines - 30);
    update(&mut state, Message::ScrollToTop);
    assert_eq!(state.page.offset, 0);
}

#[test]
fn test_tab_cycles_anchors_in_page_order() {
    let mut state = revealed_state();
    let mut visited = Vec::new();
    for _ in 0..PageSection::ALL.len() {
        update(&mut state, Message::NextSection);
        visited.push(state.navigation.focused.unwrap());
    }
    assert_eq!(
        visited,
        [
            PageSection::Comparison,
            PageSection::Platforms,
            PageSection::Installation,
            PageSection::EditorSetup,
            PageSection::ProjectStructure,
            PageSection::FirstApp,
            PageSection::Footer,
            PageSection::Hero,
        ]
    );
}

#[test]
fn test_tab_skips_hidden_sections() {
    let mut state = test_state();
    with_layout(&mut state);
    update(&mut state, Message::NextSection);
    update(&mut state, Message::NextSection);
    assert_eq!(state.navigation.focused, Some(PageSection::Platforms));
    update(&mut state, Message::NextSection);
    assert_eq!(state.navigation.focused, Some(PageSection::Footer));
}

#[test]
fn test_backtab_goes_back() {
    let mut state = revealed_state();
    update(&mut state, Message::JumpTo(PageSection::EditorSetup));
    update(&mut state, Message::PreviousSection);
    assert_eq!(state.navigation.focused, Some(PageSection::Installation));
    assert_eq!(state.page.offset, 120);
}

#[test]
fn test_jump_scrolls_to_anchor() {
    let mut state = revealed_state();
    update(&mut state, Message::JumpTo(PageSection::Platforms));
    assert_eq!(state.page.offset, 80);
}

#[test]
fn test_jump_to_hidden_section_is_ignored() {
    let mut state = test_state();
    with_layout(&mut state);
    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::JumpTo(PageSection::FirstApp));
    assert_eq!(state.page.offset, 1);
    assert_eq!(state.navigation.focused, None);
}

#[test]
fn test_manual_scroll_clears_focus() {
    let mut state = revealed_state();
    update(&mut state, Message::JumpTo(PageSection::Comparison));
    update(&mut state, Message::ScrollDown);
    assert_eq!(state.navigation.focused, None);
}

#[test]
fn test_menu_opens_on_current_section() {
    let mut state = revealed_state();
    update(&mut state, Message::JumpTo(PageSection::ProjectStructure));
    update(&mut state, Message::ToggleNavMenu);
    assert_eq!(state.ui_mode, UiMode::NavMenu);
    assert_eq!(
        state.navigation.menu.selected_section(),
        PageSection::ProjectStructure
    );
    update(&mut state, Message::ToggleNavMenu);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_menu_confirm_jumps_and_closes() {
    let mut state = revealed_state();
    update(&mut state, Message::ToggleNavMenu);
    update(&mut state, Message::NavMenuDown);
    let actions = run_update(&mut state, Message::NavMenuConfirm);
    assert!(actions.is_empty());
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.navigation.focused, Some(PageSection::Comparison));
    assert_eq!(state.page.offset, 40);
}

#[test]
fn test_menu_confirm_on_hidden_section_only_closes() {
    let mut state = test_state();
    with_layout(&mut state);
    update(&mut state, Message::ToggleNavMenu);
    state.navigation.menu.highlight(PageSection::Installation);
    run_update(&mut state, Message::NavMenuConfirm);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.page.offset, 0);
    assert!(!state.selection.is_revealed());
}

// ─────────────────────────────────────────────────────────
// Links and appearance
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_link_emits_action_and_closes() {
    let mut state = test_state();
    state.settings.links.browser = "firefox".into();
    update(&mut state, Message::ShowLinks);
    assert_eq!(state.ui_mode, UiMode::Links);

    let result = update(&mut state, Message::OpenLink(1));
    assert_eq!(
        result.action,
        Some(UpdateAction::OpenUrl {
            url: LINKS[1].url.to_string(),
            browser: "firefox".into(),
        })
    );
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_open_link_out_of_range_is_ignored() {
    let mut state = test_state();
    update(&mut state, Message::ShowLinks);
    let result = update(&mut state, Message::OpenLink(42));
    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.ui_mode, UiMode::Links);
}

#[test]
fn test_toggle_theme_and_animations() {
    let mut state = test_state();
    let theme = state.theme;
    update(&mut state, Message::ToggleTheme);
    assert_ne!(state.theme, theme);
    update(&mut state, Message::ToggleTheme);
    assert_eq!(state.theme, theme);

    assert!(state.animation.is_enabled());
    update(&mut state, Message::ToggleAnimations);
    assert!(!state.animation.is_enabled());
    assert!(state.animation.typing_done());
}

#[test]
fn test_tick_observes_visible_sections() {
    let mut state = revealed_state();
    update(&mut state, Message::Tick);
    assert!(state.animation.has_seen(PageSection::Hero));
    assert!(!state.animation.has_seen(PageSection::Footer));
}
