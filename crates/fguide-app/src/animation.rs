//! Decorative animation progress, advanced by `Message::Tick`.
//!
//! Nothing here influences the selection controller. Widgets consult
//! [`AnimationState`] only to decide how much of themselves to draw.

use std::collections::HashMap;

use fguide_core::site::{HERO_COUNTER_TARGET, HERO_SUBTITLE};
use fguide_core::PageSection;
use rand::Rng;

/// Lines of a section revealed per tick once it has entered the viewport
pub const LINES_PER_TICK: usize = 2;

/// Characters of the hero subtitle typed per tick
pub const CHARS_PER_TICK: usize = 1;

/// Number of particles drifting behind the hero banner
pub const PARTICLE_COUNT: usize = 24;

const PARTICLE_GLYPHS: [char; 4] = ['·', '•', '∙', '✦'];

/// One drifting dot of the hero particle field.
///
/// Coordinates are normalised to `0.0..1.0` and scaled by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub glyph: char,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            dx: rng.gen_range(-0.006..0.006),
            dy: rng.gen_range(-0.012..-0.002),
            glyph: PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())],
        }
    }

    fn advance(&mut self) {
        self.x = wrap_unit(self.x + self.dx);
        self.y = wrap_unit(self.y + self.dy);
    }
}

/// Wrap into `0.0..1.0`; `rem_euclid` can round up to exactly 1.0
fn wrap_unit(v: f32) -> f32 {
    let w = v.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

#[derive(Debug, Clone)]
pub struct AnimationState {
    enabled: bool,
    /// Lines revealed so far for each section that has been on screen
    reveals: HashMap<PageSection, usize>,
    typed_chars: usize,
    counter: u32,
    particles: Vec<Particle>,
    frame: u64,
}

impl AnimationState {
    pub fn new(enabled: bool) -> Self {
        Self::with_rng(enabled, &mut rand::thread_rng())
    }

    pub fn with_rng(enabled: bool, rng: &mut impl Rng) -> Self {
        Self {
            enabled,
            reveals: HashMap::new(),
            typed_chars: 0,
            counter: 0,
            particles: (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect(),
            frame: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable animation. Disabling completes every effect.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.typed_chars = HERO_SUBTITLE.chars().count();
            self.counter = HERO_COUNTER_TARGET;
        }
    }

    /// Start the reveal of sections seen for the first time
    pub fn observe(&mut self, visible: &[PageSection]) {
        for section in visible {
            self.reveals.entry(*section).or_insert(0);
        }
    }

    /// Forget reveal progress so these sections animate in again
    pub fn restart(&mut self, sections: &[PageSection]) {
        for section in sections {
            self.reveals.remove(section);
        }
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if !self.enabled {
            return;
        }

        for lines in self.reveals.values_mut() {
            *lines = lines.saturating_add(LINES_PER_TICK);
        }
        let subtitle_len = HERO_SUBTITLE.chars().count();
        self.typed_chars = (self.typed_chars + CHARS_PER_TICK).min(subtitle_len);
        self.counter = (self.counter + 1).min(HERO_COUNTER_TARGET);
        for particle in &mut self.particles {
            particle.advance();
        }
    }

    /// How many lines of `section` to draw; `None` means all of them
    pub fn revealed_lines(&self, section: PageSection) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        Some(self.reveals.get(&section).copied().unwrap_or(0))
    }

    /// Whether `section` has started revealing
    pub fn has_seen(&self, section: PageSection) -> bool {
        self.reveals.contains_key(&section)
    }

    /// The part of the hero subtitle typed so far
    pub fn typed_subtitle(&self) -> &'static str {
        if !self.enabled {
            return HERO_SUBTITLE;
        }
        match HERO_SUBTITLE.char_indices().nth(self.typed_chars) {
            Some((byte, _)) => &HERO_SUBTITLE[..byte],
            None => HERO_SUBTITLE,
        }
    }

    pub fn typing_done(&self) -> bool {
        self.typed_subtitle().len() == HERO_SUBTITLE.len()
    }

    pub fn counter(&self) -> u32 {
        if self.enabled {
            self.counter
        } else {
            HERO_COUNTER_TARGET
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Ticks since start; drives cursor blinking
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(enabled: bool) -> AnimationState {
        AnimationState::with_rng(enabled, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_unseen_section_is_hidden_until_observed() {
        let mut anim = seeded(true);
        assert_eq!(anim.revealed_lines(PageSection::Hero), Some(0));
        anim.observe(&[PageSection::Hero]);
        anim.tick();
        assert_eq!(anim.revealed_lines(PageSection::Hero), Some(LINES_PER_TICK));
        assert_eq!(anim.revealed_lines(PageSection::Footer), Some(0));
    }

    #[test]
    fn test_observe_does_not_restart_progress() {
        let mut anim = seeded(true);
        anim.observe(&[PageSection::Comparison]);
        anim.tick();
        anim.tick();
        anim.observe(&[PageSection::Comparison]);
        assert_eq!(
            anim.revealed_lines(PageSection::Comparison),
            Some(2 * LINES_PER_TICK)
        );
    }

    #[test]
    fn test_restart_forgets_progress() {
        let mut anim = seeded(true);
        anim.observe(&[PageSection::Installation]);
        anim.tick();
        anim.restart(&[PageSection::Installation]);
        assert!(!anim.has_seen(PageSection::Installation));
        assert_eq!(anim.revealed_lines(PageSection::Installation), Some(0));
    }

    #[test]
    fn test_subtitle_types_one_char_per_tick() {
        let mut anim = seeded(true);
        assert_eq!(anim.typed_subtitle(), "");
        anim.tick();
        anim.tick();
        assert_eq!(anim.typed_subtitle(), "Bu");
        for _ in 0..200 {
            anim.tick();
        }
        assert_eq!(anim.typed_subtitle(), HERO_SUBTITLE);
        assert!(anim.typing_done());
    }

    #[test]
    fn test_counter_stops_at_target() {
        let mut anim = seeded(true);
        for _ in 0..100 {
            anim.tick();
        }
        assert_eq!(anim.counter(), HERO_COUNTER_TARGET);
    }

    #[test]
    fn test_disabled_completes_every_effect() {
        let anim = seeded(false);
        assert_eq!(anim.revealed_lines(PageSection::ProjectStructure), None);
        assert_eq!(anim.typed_subtitle(), HERO_SUBTITLE);
        assert_eq!(anim.counter(), HERO_COUNTER_TARGET);
    }

    #[test]
    fn test_disabling_midway_completes() {
        let mut anim = seeded(true);
        anim.tick();
        anim.set_enabled(false);
        assert!(anim.typing_done());
        assert_eq!(anim.counter(), HERO_COUNTER_TARGET);
        assert_eq!(anim.revealed_lines(PageSection::Hero), None);
    }

    #[test]
    fn test_particles_stay_in_unit_square() {
        let mut anim = seeded(true);
        assert_eq!(anim.particles().len(), PARTICLE_COUNT);
        for _ in 0..500 {
            anim.tick();
        }
        for p in anim.particles() {
            assert!((0.0..1.0).contains(&p.x), "x = {}", p.x);
            assert!((0.0..1.0).contains(&p.y), "y = {}", p.y);
        }
    }
}
