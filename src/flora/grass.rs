use rand::Rng;

use crate::math::Vec2;
use crate::render::{Paint, Rgba, Surface};
use crate::scene::WindState;

const BLADE_BASE: Rgba = Rgba::new(34, 68, 34, 0.9);
const BLADE_TIP: Rgba = Rgba::new(51, 102, 68, 0.1);

/// A single blade, fixed at construction
#[derive(Debug, Clone, Copy)]
pub struct GrassBlade {
    pub x: f64,
    pub height: f64,
    pub width: f64,
    pub base_color: Rgba,
    pub tip_color: Rgba,
}

impl GrassBlade {
    pub fn random(rng: &mut impl Rng, surface_width: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * surface_width,
            height: rng.gen_range(60.0..100.0),
            width: rng.gen_range(2.0..5.0),
            base_color: BLADE_BASE,
            tip_color: BLADE_TIP,
        }
    }

    /// Horizontal tip displacement; taller blades sway further
    pub fn bend(&self, wind: &WindState) -> f64 {
        wind.sway(1.0, self.x * 0.05) * (self.height / 100.0)
    }
}

/// The strip of grass along the ground line
#[derive(Debug, Clone)]
pub struct Grass {
    pub ground_level: f64,
    pub blades: Vec<GrassBlade>,
}

impl Grass {
    pub fn new(rng: &mut impl Rng, surface_width: f64, ground_level: f64, blade_count: usize) -> Self {
        Self {
            ground_level,
            blades: (0..blade_count)
                .map(|_| GrassBlade::random(rng, surface_width))
                .collect(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, wind: &WindState) {
        let ground = self.ground_level;

        surface.save();
        for blade in &self.blades {
            let bend = blade.bend(wind);
            let base = Vec2::new(blade.x, ground);
            let tip = Vec2::new(blade.x + bend, ground - blade.height);
            let control = Vec2::new(blade.x, ground - blade.height / 2.0);

            surface.set_fill(Paint::linear(base, tip, blade.base_color, blade.tip_color));
            surface.begin_path();
            surface.move_to(base.offset_x(-blade.width / 2.0));
            surface.quadratic_to(control, tip);
            surface.quadratic_to(control, base.offset_x(blade.width / 2.0));
            surface.close_path();
            surface.fill();
        }
        surface.restore();
    }
}
