//! Platform selection controller
//!
//! Holds which platform's instructions are shown and whether the
//! platform-dependent sections are revealed at all. The reveal gate is
//! one-way: once a platform has been selected there is no way back to
//! `Hidden`.

use fguide_core::Platform;

/// Whether the instructional sections are visible, and for which platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealGate {
    /// Nothing selected yet
    #[default]
    Hidden,
    /// Content revealed for this platform
    Shown(Platform),
}

/// Outcome of a selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// First selection; the gate opened
    Revealed(Platform),
    /// A different platform replaced the current one
    Switched { from: Platform, to: Platform },
    /// The platform was already selected
    Unchanged,
}

impl SelectionChange {
    /// The platform that became current, if anything changed
    pub fn platform(&self) -> Option<Platform> {
        match *self {
            SelectionChange::Revealed(p) => Some(p),
            SelectionChange::Switched { to, .. } => Some(to),
            SelectionChange::Unchanged => None,
        }
    }
}

/// Selection state owned by [`crate::AppState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    gate: RevealGate,
    /// Reported while hidden and used by [`SelectionState::mount`]
    default_platform: Platform,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl SelectionState {
    pub fn new(default_platform: Platform) -> Self {
        Self {
            gate: RevealGate::Hidden,
            default_platform,
        }
    }

    /// Make `platform` current and reveal the instructional sections
    pub fn select_platform(&mut self, platform: Platform) -> SelectionChange {
        let change = match self.gate {
            RevealGate::Hidden => SelectionChange::Revealed(platform),
            RevealGate::Shown(current) if current == platform => SelectionChange::Unchanged,
            RevealGate::Shown(current) => SelectionChange::Switched {
                from: current,
                to: platform,
            },
        };
        self.gate = RevealGate::Shown(platform);
        change
    }

    /// `(platform, revealed)`. While hidden this is `(default, false)`.
    pub fn current_selection(&self) -> (Platform, bool) {
        match self.gate {
            RevealGate::Hidden => (self.default_platform, false),
            RevealGate::Shown(p) => (p, true),
        }
    }

    /// Auto-select the default platform when the page first appears.
    ///
    /// Only acts while the gate is still hidden, so mounting twice (or after
    /// the user already picked something) changes nothing.
    pub fn mount(&mut self) -> SelectionChange {
        match self.gate {
            RevealGate::Hidden => self.select_platform(self.default_platform),
            RevealGate::Shown(_) => SelectionChange::Unchanged,
        }
    }

    /// Platform under the selector cursor
    pub fn platform(&self) -> Platform {
        self.current_selection().0
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.gate, RevealGate::Shown(_))
    }

    /// Platform whose content is on screen, `None` while hidden
    pub fn revealed_platform(&self) -> Option<Platform> {
        match self.gate {
            RevealGate::Hidden => None,
            RevealGate::Shown(p) => Some(p),
        }
    }

    pub fn gate(&self) -> RevealGate {
        self.gate
    }

    pub fn default_platform(&self) -> Platform {
        self.default_platform
    }
}
