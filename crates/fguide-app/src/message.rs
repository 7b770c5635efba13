//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use fguide_core::{PageSection, Platform};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Animation tick (sent on every poll timeout)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// The page has been mounted; runs the selector's auto-select
    Mount,

    // ─────────────────────────────────────────────────────────
    // Platform Selection
    // ─────────────────────────────────────────────────────────
    /// Select a platform and reveal the instructional sections
    SelectPlatform(Platform),
    /// Select the platform after the current one
    NextPlatform,
    /// Select the platform before the current one
    PreviousPlatform,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Anchor Navigation
    // ─────────────────────────────────────────────────────────
    /// Jump to the next section anchor below the viewport top
    NextSection,
    /// Jump to the previous section anchor
    PreviousSection,
    /// Scroll so the section starts at the top of the viewport
    JumpTo(PageSection),

    // ─────────────────────────────────────────────────────────
    // Navigation Menu
    // ─────────────────────────────────────────────────────────
    ToggleNavMenu,
    CloseNavMenu,
    NavMenuUp,
    NavMenuDown,
    /// Jump to the highlighted entry and close the menu
    NavMenuConfirm,

    // ─────────────────────────────────────────────────────────
    // Links Overlay
    // ─────────────────────────────────────────────────────────
    ShowLinks,
    CloseLinks,
    /// Open the link at this index in the system browser
    OpenLink(usize),

    // ─────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    ToggleAnimations,
}
