use std::f64::consts::TAU;
use rand::Rng;

use crate::math::Vec2;
use crate::render::{Paint, Rgba, Surface};

/// Stars stay clear of the strip above the ground
const GROUND_MARGIN: f64 = 150.0;
const STAR_COLOR: Rgba = Rgba::new(255, 255, 240, 1.0);

/// A twinkling star with its own period and phase
#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec2,
    pub radius: f64,
    pub alpha: f64,
    /// Twinkle period in milliseconds, always positive
    pub twinkle_speed: f64,
    pub twinkle_offset: f64,
}

impl Star {
    pub fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let twinkle_speed = rng.gen_range(2.0..6.0) * 1000.0;

        Self {
            position: Vec2::new(
                rng.gen::<f64>() * width,
                rng.gen::<f64>() * (height - GROUND_MARGIN).max(0.0),
            ),
            radius: rng.gen_range(0.5..2.0),
            alpha: rng.gen_range(0.5..1.0),
            twinkle_speed,
            twinkle_offset: rng.gen::<f64>() * twinkle_speed,
        }
    }

    pub fn update(&mut self, timestamp: f64) {
        let phase = (timestamp + self.twinkle_offset) / self.twinkle_speed * TAU;
        self.alpha = 0.5 + 0.5 * phase.sin();
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(Paint::Solid(STAR_COLOR.with_alpha(self.alpha)));
        surface.begin_path();
        surface.circle(self.position, self.radius);
        surface.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_star_construction_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let star = Star::random(&mut rng, 800.0, 600.0);
            assert!(star.twinkle_speed >= 2000.0 && star.twinkle_speed < 6000.0);
            assert!(star.twinkle_offset >= 0.0 && star.twinkle_offset < star.twinkle_speed);
            assert!(star.position.y >= 0.0 && star.position.y < 450.0);
            assert!(star.radius >= 0.5 && star.radius < 2.0);
        }
    }

    #[test]
    fn test_star_alpha_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut star = Star::random(&mut rng, 800.0, 600.0);

        for i in 0..5000 {
            star.update(i as f64 * 3.7);
            assert!(star.alpha >= 0.0 && star.alpha <= 1.0, "alpha {}", star.alpha);
        }
    }

    #[test]
    fn test_star_twinkle_period() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut star = Star::random(&mut rng, 100.0, 400.0);

        star.update(1000.0);
        let a = star.alpha;
        star.update(1000.0 + star.twinkle_speed);
        assert!((star.alpha - a).abs() < 1e-9);
    }

    #[test]
    fn test_short_surface_keeps_stars_on_top() {
        let mut rng = SmallRng::seed_from_u64(5);
        let star = Star::random(&mut rng, 300.0, 100.0);
        assert_eq!(star.position.y, 0.0);
    }
}
