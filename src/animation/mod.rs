//! Animation module for timing and growth curves
//!
//! Easing curves, the derived flower growth timeline and the frame clock
//! that turns host timestamps into deltas.

mod easing;
mod growth;
mod playback;

pub use easing::{Easing, ease, ease_out_cubic};
pub use growth::{GrowthPhase, GrowthTimeline};
pub use playback::{Playback, Tick};
