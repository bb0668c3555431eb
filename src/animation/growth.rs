//! Flower growth timeline
//!
//! A flower has no stored growth state. Its phase and the progress of each
//! organ are pure functions of the elapsed time since it started:
//! - the stem grows first, eased out
//! - leaves unfold linearly once the stem is partly up
//! - petals open last, eased out, overlapping the end of the stem growth

use super::easing::{Easing, ease};

/// Coarse growth phase derived from elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPhase {
    /// Start delay has not elapsed yet; nothing is drawn
    Dormant,
    /// Stem, leaves or petals are still changing
    Growing,
    /// Terminal; no further visual change from growth
    Grown,
}

/// Growth timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthTimeline {
    /// Time after which the flower counts as grown
    pub growth_duration: f64,
    pub stem_duration: f64,
    pub leaf_start: f64,
    pub leaf_duration: f64,
    pub petal_start: f64,
    pub petal_duration: f64,
    pub stem_easing: Easing,
    pub petal_easing: Easing,
}

impl Default for GrowthTimeline {
    fn default() -> Self {
        Self {
            growth_duration: 10_000.0,
            stem_duration: 7_000.0,
            leaf_start: 2_000.0,
            leaf_duration: 5_000.0,
            petal_start: 5_000.0,
            petal_duration: 5_000.0,
            stem_easing: Easing::EaseOutCubic,
            petal_easing: Easing::EaseOutCubic,
        }
    }
}

impl GrowthTimeline {
    pub fn phase(&self, elapsed: f64) -> GrowthPhase {
        if elapsed < 0.0 {
            GrowthPhase::Dormant
        } else if elapsed >= self.growth_duration {
            GrowthPhase::Grown
        } else {
            GrowthPhase::Growing
        }
    }

    /// Linear stem progress in [0, 1]
    pub fn stem_progress(&self, elapsed: f64) -> f64 {
        (elapsed / self.stem_duration).clamp(0.0, 1.0)
    }

    /// Stem height as a fraction of its maximum
    pub fn stem_height_factor(&self, elapsed: f64) -> f64 {
        ease(self.stem_progress(elapsed), self.stem_easing)
    }

    /// Linear leaf progress, `None` until leaves start growing
    pub fn leaf_progress(&self, elapsed: f64) -> Option<f64> {
        (elapsed > self.leaf_start)
            .then(|| ((elapsed - self.leaf_start) / self.leaf_duration).min(1.0))
    }

    /// Eased petal scale, `None` until petals start opening
    pub fn petal_scale(&self, elapsed: f64) -> Option<f64> {
        (elapsed > self.petal_start).then(|| {
            let progress = ((elapsed - self.petal_start) / self.petal_duration).min(1.0);
            ease(progress, self.petal_easing)
        })
    }
}
