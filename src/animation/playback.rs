//! Frame clock shared by the animation loop
//!
//! The host calls `tick` once per animation frame with its timestamp. The
//! clock turns that into the delta used to advance the wind and guards the
//! timestamp preconditions: a paused clock yields nothing, and a NaN or
//! backwards timestamp skips the frame instead of corrupting time-based state.
//! A step back within a few milliseconds is jitter and advances by zero.

/// Backwards steps up to this size are treated as a zero delta. A frame
/// stamped just before the `now` given to `resume` lands here.
const CLOCK_SLACK_MS: f64 = 20.0;

/// Result of feeding one timestamp to the clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Advance by this many milliseconds
    Advance(f64),
    /// Timestamp rejected; draw nothing and keep previous state
    Skip,
    /// Clock is paused; host should stop scheduling frames
    Paused,
}

#[derive(Debug, Clone, Default)]
pub struct Playback {
    paused: bool,
    last_time: Option<f64>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick(&mut self, timestamp: f64) -> Tick {
        if self.paused {
            return Tick::Paused;
        }
        if !timestamp.is_finite() {
            log::warn!("skipping frame with non-finite timestamp {}", timestamp);
            return Tick::Skip;
        }

        match self.last_time {
            None => {
                self.last_time = Some(timestamp);
                Tick::Advance(0.0)
            }
            Some(last) if timestamp < last && last - timestamp <= CLOCK_SLACK_MS => Tick::Advance(0.0),
            Some(last) if timestamp < last => {
                log::warn!("skipping frame: timestamp {} went backwards from {}", timestamp, last);
                Tick::Skip
            }
            Some(last) => {
                self.last_time = Some(timestamp);
                Tick::Advance(timestamp - last)
            }
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume from `now` so the first frame after a pause has a small delta
    pub fn resume(&mut self, now: f64) {
        self.paused = false;
        self.last_time = now.is_finite().then_some(now);
    }

    /// Forget the last timestamp after the scene is rebuilt
    pub fn rewind(&mut self) {
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_has_zero_delta() {
        let mut clock = Playback::new();
        assert_eq!(clock.tick(1234.0), Tick::Advance(0.0));
        assert_eq!(clock.tick(1250.0), Tick::Advance(16.0));
    }

    #[test]
    fn test_rejects_bad_timestamps() {
        let mut clock = Playback::new();
        clock.tick(100.0);

        assert_eq!(clock.tick(f64::NAN), Tick::Skip);
        assert_eq!(clock.tick(f64::INFINITY), Tick::Skip);
        assert_eq!(clock.tick(50.0), Tick::Skip);
        // Rejected frames do not move the clock
        assert_eq!(clock.tick(110.0), Tick::Advance(10.0));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = Playback::new();
        clock.tick(100.0);
        clock.pause();

        assert!(clock.is_paused());
        assert_eq!(clock.tick(200.0), Tick::Paused);

        clock.resume(5_000.0);
        assert!(!clock.is_paused());
        assert_eq!(clock.tick(5_016.0), Tick::Advance(16.0));
    }

    #[test]
    fn test_frame_stamped_before_resume() {
        let mut clock = Playback::new();
        clock.tick(100.0);
        clock.pause();
        clock.resume(5_000.0);

        assert_eq!(clock.tick(4_995.0), Tick::Advance(0.0));
        // The clock stays at the resume time
        assert_eq!(clock.tick(5_016.0), Tick::Advance(16.0));
    }

    #[test]
    fn test_rewind() {
        let mut clock = Playback::new();
        clock.tick(100.0);
        clock.rewind();
        assert_eq!(clock.tick(40.0), Tick::Advance(0.0));
    }
}
