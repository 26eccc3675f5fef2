//! One-shot "in view" latches for page sections and the scroll-driven hero
//! glow.

use crate::constants::*;
use crate::paint::Fill;

/// Latches `true` the first time its section intersects the viewport and
/// stays there; scrolling away never hides it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only on the observation that reveals the section.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Reveal latches for `len` sections, addressed by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    latches: Vec<Reveal>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            latches: vec![Reveal::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.latches.get(index).is_some_and(Reveal::is_revealed)
    }

    /// Unknown indices are ignored.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        self.latches
            .get_mut(index)
            .is_some_and(|r| r.observe(intersecting))
    }

    pub fn all_revealed(&self) -> bool {
        self.latches.iter().all(Reveal::is_revealed)
    }
}

/// Vertical centre of the hero glow, in percent of the hero height, for a
/// page scrolled by `scroll_y` pixels.
pub fn hero_glow_center(scroll_y: f32) -> f32 {
    if scroll_y.is_finite() {
        HERO_GLOW_BASE_PERCENT + scroll_y * HERO_GLOW_PARALLAX
    } else {
        HERO_GLOW_BASE_PERCENT
    }
}

/// CSS `background` value for the hero glow at `scroll_y`.
pub fn hero_glow_css(scroll_y: f32) -> String {
    let ink = Fill::new(HERO_GLOW_INK, HERO_GLOW_OPACITY).css();
    format!(
        "radial-gradient(circle at 50% {}%, {} 0%, transparent 60%)",
        hero_glow_center(scroll_y),
        ink
    )
}
