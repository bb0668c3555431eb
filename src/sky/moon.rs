//! The moon and its slow elliptical arc across the sky
//!
//! The orbit is centered on the middle of the ground line, so the visible
//! half of the cycle is the upper half of the ellipse (`sin(angle) <= 0`).
//! During the other half the moon sits below the ground and is hidden
//! behind the grass or off the surface entirely.

use std::f64::consts::{PI, TAU};
use rand::Rng;

use crate::math::Vec2;
use crate::render::{Paint, Rgba, Surface};

const CRATER_COUNT: usize = 15;
const MOON_COLOR: Rgba = Rgba::hex(0xE0E0E0);
const GLOW_COLOR: Rgba = Rgba::new(240, 240, 255, 0.25);
const GLOW_BLUR: f64 = 80.0;
/// One full orbit every 30 seconds
const ORBIT_PERIOD_MS: f64 = 30_000.0;

/// A crater, positioned relative to the moon's center
#[derive(Debug, Clone, Copy)]
pub struct Crater {
    pub offset: Vec2,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct Moon {
    pub radius: f64,
    pub angle: f64,
    pub position: Vec2,
    /// Horizontal semi-axis
    pub orbit_a: f64,
    /// Vertical semi-axis
    pub orbit_b: f64,
    /// Radians per millisecond
    pub speed: f64,
    pub craters: Vec<Crater>,
    orbit_center: Vec2,
}

impl Moon {
    pub fn new(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let radius = width.min(height) * 0.1;
        let craters = (0..CRATER_COUNT)
            .map(|_| {
                let crater_radius = rng.gen::<f64>() * radius * 0.2 + radius * 0.05;
                let direction = Vec2::from_angle(rng.gen::<f64>() * TAU);
                let distance = rng.gen::<f64>() * radius * 0.8;
                Crater {
                    offset: direction.scale(distance),
                    radius: crater_radius,
                    alpha: rng.gen_range(0.1..0.4),
                }
            })
            .collect();

        let mut moon = Self {
            radius,
            angle: PI,
            position: Vec2::ZERO,
            orbit_a: width * 0.6,
            orbit_b: height * 0.6,
            speed: TAU / ORBIT_PERIOD_MS,
            craters,
            orbit_center: Vec2::new(width / 2.0, height),
        };
        moon.position = moon.orbit_point(moon.angle);
        moon
    }

    /// Point on the orbit at `angle`
    pub fn orbit_point(&self, angle: f64) -> Vec2 {
        Vec2::new(
            self.orbit_center.x + self.orbit_a * angle.cos(),
            self.orbit_center.y + self.orbit_b * angle.sin(),
        )
    }

    /// Whether the moon is on the upper, visible half of its orbit
    pub fn is_above_ground(&self) -> bool {
        self.angle.sin() <= 0.0
    }

    pub fn update(&mut self, timestamp: f64) {
        self.angle = (timestamp * self.speed) % TAU;
        self.position = self.orbit_point(self.angle);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.translate(self.position);

        surface.set_shadow(GLOW_COLOR, GLOW_BLUR);
        surface.set_fill(Paint::Solid(MOON_COLOR));
        surface.begin_path();
        surface.circle(Vec2::ZERO, self.radius);
        surface.fill();
        surface.set_shadow(Rgba::TRANSPARENT, 0.0);

        for crater in &self.craters {
            surface.set_fill(Paint::Solid(Rgba::new(0, 0, 0, crater.alpha)));
            surface.begin_path();
            surface.circle(crater.offset, crater.radius);
            surface.fill();

            // Highlight on the lower-right rim
            let rim = Vec2::new(crater.radius * 0.2, crater.radius * 0.2);
            surface.set_fill(Paint::Solid(Rgba::new(255, 255, 255, crater.alpha * 0.5)));
            surface.begin_path();
            surface.circle(crater.offset + rim, crater.radius * 0.9);
            surface.fill();
        }

        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use crate::render::{DrawCommand, RecordingSurface};

    fn moon() -> Moon {
        let mut rng = SmallRng::seed_from_u64(42);
        Moon::new(&mut rng, 800.0, 600.0)
    }

    #[test]
    fn test_moon_construction() {
        let moon = moon();
        assert!((moon.radius - 60.0).abs() < 1e-9);
        assert_eq!(moon.craters.len(), CRATER_COUNT);
        for crater in &moon.craters {
            assert!(crater.offset.length() < moon.radius * 0.8 + 1e-9);
            assert!(crater.radius >= moon.radius * 0.05 && crater.radius < moon.radius * 0.25);
        }
        // Starts at the left horizon
        assert!((moon.position.x - (400.0 - 480.0)).abs() < 1e-9);
        assert!((moon.position.y - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_orbit_peak() {
        let mut moon = moon();
        // Three quarters of a period puts the moon at the top of its arc
        moon.update(ORBIT_PERIOD_MS * 0.75);
        assert!((moon.position.x - 400.0).abs() < 1e-6);
        assert!((moon.position.y - (600.0 - 360.0)).abs() < 1e-6);
        assert!(moon.is_above_ground());
    }

    #[test]
    fn test_orbit_wraps() {
        let mut moon = moon();
        moon.update(ORBIT_PERIOD_MS * 3.25);
        assert!(moon.angle >= 0.0 && moon.angle < TAU);
        assert!(!moon.is_above_ground());
    }

    #[test]
    fn test_craters_fixed_between_frames() {
        let mut moon = moon();
        let before: Vec<Vec2> = moon.craters.iter().map(|c| c.offset).collect();
        moon.update(12_345.0);
        let after: Vec<Vec2> = moon.craters.iter().map(|c| c.offset).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_draw_glow_then_disc_then_craters() {
        let moon = moon();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        moon.draw(&mut surface);

        // disc + two fills per crater
        assert_eq!(surface.fill_count(), 1 + 2 * CRATER_COUNT);
        assert_eq!(surface.depth(), 0);
        assert_eq!(
            surface.commands()[2],
            DrawCommand::SetShadow { color: GLOW_COLOR, blur: GLOW_BLUR }
        );
    }
}
