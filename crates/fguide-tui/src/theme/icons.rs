//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use fguide_app::config::IconMode;
use fguide_core::comparison::Metric;
use fguide_core::install::StepKind;
use fguide_core::sample_app::DeviceKind;
use fguide_core::Platform;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn platform(&self, platform: Platform) -> &'static str {
        match (self.mode, platform) {
            (IconMode::NerdFonts, Platform::Windows) => "\u{f17a}", // nf-fa-windows
            (IconMode::NerdFonts, Platform::MacOs) => "\u{f179}",   // nf-fa-apple
            (IconMode::NerdFonts, Platform::Linux) => "\u{f17c}",   // nf-fa-linux
            (IconMode::Unicode, Platform::Windows) => "\u{229e}",   // ⊞
            (IconMode::Unicode, Platform::MacOs) => "\u{2318}",     // ⌘
            (IconMode::Unicode, Platform::Linux) => "\u{03bb}",     // λ
        }
    }

    pub fn step(&self, kind: StepKind) -> &'static str {
        match kind {
            StepKind::Download => self.download(),
            StepKind::Terminal => self.terminal(),
            StepKind::Verify => self.check(),
        }
    }

    pub fn metric(&self, metric: Metric) -> &'static str {
        match (self.mode, metric) {
            (IconMode::NerdFonts, Metric::Size) => "\u{f1c0}",       // nf-fa-database
            (IconMode::NerdFonts, Metric::Startup) => "\u{f0e7}",    // nf-fa-bolt
            (IconMode::NerdFonts, Metric::Memory) => "\u{f2db}",     // nf-fa-microchip
            (IconMode::NerdFonts, Metric::Capability) => "\u{f0ad}", // nf-fa-wrench
            (IconMode::Unicode, Metric::Size) => "\u{25a4}",         // ▤
            (IconMode::Unicode, Metric::Startup) => "\u{21af}",      // ↯
            (IconMode::Unicode, Metric::Memory) => "\u{25a6}",       // ▦
            (IconMode::Unicode, Metric::Capability) => "\u{2692}",   // ⚒
        }
    }

    pub fn device(&self, device: DeviceKind) -> &'static str {
        match (self.mode, device) {
            (IconMode::NerdFonts, DeviceKind::Desktop) => "\u{f108}", // nf-fa-desktop
            (IconMode::NerdFonts, DeviceKind::Web) => "\u{f0ac}",     // nf-fa-globe
            (IconMode::NerdFonts, DeviceKind::Mobile) => "\u{f3cd}",  // nf-fa-mobile
            (IconMode::Unicode, DeviceKind::Desktop) => "[D]",
            (IconMode::Unicode, DeviceKind::Web) => "[W]",
            (IconMode::Unicode, DeviceKind::Mobile) => "[M]",
        }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f019}", // nf-fa-download
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn cross(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-times
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn folder(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f07b}", // nf-fa-folder
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15b}", // nf-fa-file
            IconMode::Unicode => "\u{2022}",   // •
        }
    }

    pub fn lightbulb(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0eb}", // nf-fa-lightbulb_o
            IconMode::Unicode => "\u{2605}",   // ★
        }
    }

    pub fn extension(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f12e}", // nf-fa-puzzle_piece
            IconMode::Unicode => "\u{25c6}",   // ◆
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn heart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f004}", // nf-fa-heart
            IconMode::Unicode => "\u{2665}",   // ♥
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04b}", // nf-fa-play
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn pointer(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0da}", // nf-fa-caret_right
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f10c}", // nf-fa-circle_o
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_platform_icons_are_distinct() {
        let icons = IconSet::new(IconMode::Unicode);
        let glyphs: Vec<_> = Platform::ALL.iter().map(|p| icons.platform(*p)).collect();
        assert_eq!(glyphs, ["⊞", "⌘", "λ"]);
    }

    #[test]
    fn test_nerd_fonts_use_private_use_area() {
        let icons = IconSet::new(IconMode::NerdFonts);
        for p in Platform::ALL {
            let c = icons.platform(p).chars().next().unwrap();
            assert!(('\u{e000}'..='\u{f8ff}').contains(&c));
        }
    }

    #[test]
    fn test_step_icons_follow_kind() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.step(StepKind::Download), icons.download());
        assert_eq!(icons.step(StepKind::Terminal), icons.terminal());
        assert_eq!(icons.step(StepKind::Verify), icons.check());
    }
}
