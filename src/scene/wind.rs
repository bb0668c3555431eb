//! Global wind phase shared by grass and flowers

/// A single advancing phase; every swaying element samples `sin` of it with
/// its own multiplier and offset, so no wraparound is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindState {
    /// Phase in radians, grows without bound
    pub angle: f64,
    /// Radians per millisecond
    pub speed: f64,
    /// Maximum horizontal displacement in pixels
    pub force: f64,
}

impl Default for WindState {
    fn default() -> Self {
        Self::new(0.0003, 15.0)
    }
}

impl WindState {
    pub fn new(speed: f64, force: f64) -> Self {
        Self {
            angle: 0.0,
            speed,
            force,
        }
    }

    /// Advance the phase by `delta` milliseconds
    pub fn advance(&mut self, delta: f64) {
        self.angle += self.speed * delta;
    }

    /// `sin(angle * rate + phase) * force`
    pub fn sway(&self, rate: f64, phase: f64) -> f64 {
        (self.angle * rate + phase).sin() * self.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut wind = WindState::default();
        wind.advance(1000.0);
        assert!((wind.angle - 0.3).abs() < 1e-12);
        wind.advance(0.0);
        assert!((wind.angle - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sway_bounded_by_force() {
        let mut wind = WindState::new(0.01, 15.0);
        for _ in 0..500 {
            wind.advance(16.7);
            assert!(wind.sway(1.3, 2.0).abs() <= 15.0);
        }
    }
}
