//! Fireflies drifting above the flower bed
//!
//! Each firefly drifts at a constant velocity plus a circular wobble and
//! wraps around the left and right edges. Its glow follows a triangular
//! blink: after `blink_delay` of rest it brightens from 0.2 to 1.0 over half
//! of `blink_duration`, dims back to 0.2 over the other half, then rests
//! again. Motion is applied per frame, not per millisecond.

use std::f64::consts::TAU;
use rand::Rng;

use crate::math::Vec2;
use crate::render::{Paint, Rgba, Surface};

/// Height band above the ground fireflies are spawned in
const FLOWER_ZONE_HEIGHT: f64 = 300.0;
const FLOWER_ZONE_FLOOR: f64 = 50.0;
const REST_ALPHA: f64 = 0.2;
const WOBBLE: f64 = 0.5;
const GLOW_COLOR: Rgba = Rgba::new(255, 255, 153, 0.8);
const GLOW_BLUR: f64 = 20.0;

/// A single firefly
#[derive(Debug, Clone)]
pub struct Firefly {
    pub position: Vec2,
    pub radius: f64,
    pub alpha: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// Wobble phase, advanced by `angle_speed` every update
    pub angle: f64,
    pub angle_speed: f64,
    pub blink_duration: f64,
    /// Rest time before each blink; fixed for the firefly's lifetime
    pub blink_delay: f64,
    pub last_blink_time: f64,
    width: f64,
}

impl Firefly {
    pub fn random(rng: &mut impl Rng, width: f64, ground_level: f64) -> Self {
        Self {
            position: Vec2::new(
                rng.gen::<f64>() * width,
                ground_level - (rng.gen::<f64>() * FLOWER_ZONE_HEIGHT + FLOWER_ZONE_FLOOR),
            ),
            radius: rng.gen_range(1.0..3.0),
            alpha: REST_ALPHA,
            speed_x: (rng.gen::<f64>() - 0.5) * 1.5,
            speed_y: (rng.gen::<f64>() - 0.5) * 0.5,
            angle: rng.gen::<f64>() * TAU,
            angle_speed: (rng.gen::<f64>() - 0.5) * 0.1,
            blink_duration: 1000.0,
            blink_delay: rng.gen_range(2000.0..7000.0),
            last_blink_time: 0.0,
            width,
        }
    }

    pub fn update(&mut self, timestamp: f64) {
        self.position.x += self.speed_x + self.angle.sin() * WOBBLE;
        self.position.y += self.speed_y + self.angle.cos() * WOBBLE;
        self.angle += self.angle_speed;
        self.wrap_horizontally();
        self.update_blink(timestamp);
    }

    fn wrap_horizontally(&mut self) {
        if self.position.x > self.width + self.radius {
            self.position.x = -self.radius;
        }
        if self.position.x < -self.radius {
            self.position.x = self.width + self.radius;
        }
    }

    fn update_blink(&mut self, timestamp: f64) {
        let blink_start = self.last_blink_time + self.blink_delay;
        if timestamp <= blink_start {
            return;
        }

        let time_in_blink = timestamp - blink_start;
        let half = self.blink_duration / 2.0;
        if time_in_blink < self.blink_duration {
            self.alpha = if time_in_blink < half {
                REST_ALPHA + (1.0 - REST_ALPHA) * (time_in_blink / half)
            } else {
                1.0 - (1.0 - REST_ALPHA) * ((time_in_blink - half) / half)
            };
        } else {
            self.alpha = REST_ALPHA;
            self.last_blink_time = timestamp;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_shadow(GLOW_COLOR, GLOW_BLUR * self.alpha);
        surface.set_fill(Paint::Solid(GLOW_COLOR.with_alpha(self.alpha)));
        surface.begin_path();
        surface.circle(self.position, self.radius);
        surface.fill();
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn firefly(seed: u64) -> Firefly {
        let mut rng = SmallRng::seed_from_u64(seed);
        Firefly::random(&mut rng, 800.0, 600.0)
    }

    #[test]
    fn test_spawn_in_flower_zone() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..200 {
            let f = Firefly::random(&mut rng, 800.0, 600.0);
            assert!(f.position.y <= 550.0 && f.position.y > 250.0);
            assert!(f.blink_delay >= 2000.0 && f.blink_delay < 7000.0);
            assert!(f.speed_x.abs() <= 0.75);
            assert_eq!(f.alpha, REST_ALPHA);
        }
    }

    #[test]
    fn test_wraparound_keeps_x_in_bounds() {
        for seed in 0..20 {
            let mut f = firefly(seed);
            f.speed_x = if seed % 2 == 0 { 3.0 } else { -3.0 };
            for frame in 0..2000 {
                f.update(frame as f64 * 16.0);
                assert!(
                    f.position.x >= -f.radius && f.position.x <= 800.0 + f.radius,
                    "x {} out of bounds",
                    f.position.x
                );
            }
        }
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut f = firefly(9);
        f.position.x = 800.0 + f.radius + 0.1;
        f.wrap_horizontally();
        assert_eq!(f.position.x, -f.radius);
    }

    #[test]
    fn test_blink_envelope() {
        let mut f = firefly(4);
        f.blink_delay = 3000.0;

        f.update_blink(2999.0);
        assert_eq!(f.alpha, REST_ALPHA);

        f.update_blink(3250.0);
        assert!((f.alpha - 0.6).abs() < 1e-9);

        f.update_blink(3500.0);
        assert!((f.alpha - 1.0).abs() < 1e-9);

        f.update_blink(3750.0);
        assert!((f.alpha - 0.6).abs() < 1e-9);

        // Blink over: back to rest and the delay restarts from now
        f.update_blink(4100.0);
        assert_eq!(f.alpha, REST_ALPHA);
        assert_eq!(f.last_blink_time, 4100.0);
        assert_eq!(f.blink_delay, 3000.0);

        f.update_blink(7000.0);
        assert_eq!(f.alpha, REST_ALPHA);
        f.update_blink(7600.0);
        assert!(f.alpha > REST_ALPHA);
    }

    #[test]
    fn test_alpha_stays_in_blink_range() {
        let mut f = firefly(12);
        for frame in 0..3000 {
            f.update(frame as f64 * 7.0);
            assert!(f.alpha >= REST_ALPHA - 1e-9 && f.alpha <= 1.0 + 1e-9);
        }
    }
}
