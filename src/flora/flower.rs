//! A procedurally growing flower
//!
//! Growth is never stored: every frame the flower recomputes its stem
//! height, leaf size and petal scale from the elapsed time through its
//! `GrowthTimeline`. The stem is a quadratic bezier whose control point and
//! tip are pushed by the wind; leaves hang off fixed parametric positions
//! on that curve and petals fan out around its tip.

use std::f64::consts::{PI, TAU};
use rand::Rng;

use crate::animation::{GrowthPhase, GrowthTimeline};
use crate::math::{QuadraticBezier, Vec2};
use crate::render::{Paint, Rgba, Surface};
use crate::scene::WindState;
use super::blueprint::{FlowerBlueprint, Species};

const STEM_BASE_WIDTH: f64 = 10.0;
const STEM_BASE_COLOR: Rgba = Rgba::new(51, 136, 68, 0.9);
const STEM_TIP_COLOR: Rgba = Rgba::new(80, 160, 100, 0.2);
const LEAF_TIP_COLOR: Rgba = Rgba::new(80, 160, 100, 0.3);
const LEAF_LENGTH: f64 = 60.0;
const LEAF_WIDTH: f64 = 25.0;
/// Leaves tilt 36 degrees away from the stem
const LEAF_ANGLE: f64 = PI / 5.0;
const PETAL_GLOW_BLUR: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafSide {
    Left,
    Right,
}

impl LeafSide {
    pub fn sign(&self) -> f64 {
        match self {
            LeafSide::Left => -1.0,
            LeafSide::Right => 1.0,
        }
    }
}

/// A leaf attached at parametric position `pos` along the stem
#[derive(Debug, Clone, Copy)]
pub struct Leaf {
    pub pos: f64,
    pub side: LeafSide,
    pub size: f64,
}

#[derive(Debug, Clone)]
pub struct Flower {
    pub x: f64,
    pub ground_level: f64,
    pub blueprint: &'static FlowerBlueprint,
    /// Start delay after the first update, in milliseconds
    pub delay: f64,
    pub timeline: GrowthTimeline,
    pub max_stem_height: f64,
    pub leaves: [Leaf; 2],
    start_time: Option<f64>,
    elapsed: f64,
}

impl Flower {
    pub fn new(rng: &mut impl Rng, x: f64, ground_level: f64, species: Species, delay: f64) -> Self {
        Self {
            x,
            ground_level,
            blueprint: species.blueprint(),
            delay,
            timeline: GrowthTimeline::default(),
            max_stem_height: rng.gen_range(200.0..300.0),
            leaves: [
                Leaf { pos: 0.4, side: LeafSide::Left, size: rng.gen_range(1.2..1.6) },
                Leaf { pos: 0.7, side: LeafSide::Right, size: rng.gen_range(1.3..1.5) },
            ],
            start_time: None,
            elapsed: f64::NEG_INFINITY,
        }
    }

    pub fn species(&self) -> Species {
        self.blueprint.species
    }

    /// The first update pins the start time; later ones only move elapsed forward
    pub fn update(&mut self, timestamp: f64) {
        let start = *self.start_time.get_or_insert(timestamp + self.delay);
        self.elapsed = self.elapsed.max(timestamp - start);
    }

    /// Milliseconds since growth began; negative while dormant
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn phase(&self) -> GrowthPhase {
        self.timeline.phase(self.elapsed)
    }

    pub fn is_grown(&self) -> bool {
        self.phase() == GrowthPhase::Grown
    }

    pub fn stem_progress(&self) -> f64 {
        self.timeline.stem_progress(self.elapsed)
    }

    pub fn current_stem_height(&self) -> f64 {
        self.max_stem_height * self.timeline.stem_height_factor(self.elapsed)
    }

    /// Stem curve in flower-local space (origin on the ground, y up is negative)
    pub fn stem_curve(&self, wind: &WindState) -> QuadraticBezier {
        let height = self.current_stem_height();
        QuadraticBezier::new(
            Vec2::ZERO,
            Vec2::new(wind.sway(1.0, self.x * 0.1), -height / 2.0),
            Vec2::new(wind.sway(1.2, self.x * 0.1) * 1.5, -height),
        )
    }

    /// Stem width narrows to half as the stem finishes growing
    pub fn stem_width(&self) -> f64 {
        STEM_BASE_WIDTH * (1.0 - self.stem_progress() * 0.5)
    }

    pub fn draw(&self, surface: &mut dyn Surface, wind: &WindState) {
        if self.phase() == GrowthPhase::Dormant {
            return;
        }

        surface.save();
        surface.translate(Vec2::new(self.x, self.ground_level));

        let stem = self.stem_curve(wind);
        if self.current_stem_height() > 0.0 {
            self.draw_stem(surface, &stem);
        }
        if let Some(progress) = self.timeline.leaf_progress(self.elapsed) {
            for leaf in &self.leaves {
                self.draw_leaf(surface, wind, &stem, leaf, progress);
            }
        }

        surface.translate(stem.end);
        if let Some(scale) = self.timeline.petal_scale(self.elapsed) {
            self.draw_head(surface, wind, scale);
        }

        surface.restore();
    }

    fn draw_stem(&self, surface: &mut dyn Surface, stem: &QuadraticBezier) {
        let half_width = self.stem_width() / 2.0;

        surface.set_fill(Paint::linear(
            stem.start,
            Vec2::new(0.0, stem.end.y),
            STEM_BASE_COLOR,
            STEM_TIP_COLOR,
        ));
        surface.begin_path();
        surface.move_to(stem.start.offset_x(-half_width));
        surface.quadratic_to(stem.control, stem.end.offset_x(-1.0));
        surface.quadratic_to(stem.control, stem.start.offset_x(half_width));
        surface.close_path();
        surface.fill();
    }

    fn draw_leaf(
        &self,
        surface: &mut dyn Surface,
        wind: &WindState,
        stem: &QuadraticBezier,
        leaf: &Leaf,
        progress: f64,
    ) {
        let side = leaf.side.sign();
        let leaf_wind = wind.sway(1.3, self.x * 0.2 + leaf.pos) * 0.5
            + (wind.angle * 0.8 + leaf.pos).cos() * wind.force * 0.2;
        let length = LEAF_LENGTH * leaf.size * progress;
        let width = LEAF_WIDTH * leaf.size * progress;
        let tip = Vec2::new(leaf_wind, -length);

        surface.save();
        surface.translate(stem.point_at(leaf.pos));
        surface.rotate(LEAF_ANGLE * side);

        surface.set_fill(Paint::linear(Vec2::ZERO, tip, STEM_BASE_COLOR, LEAF_TIP_COLOR));
        surface.begin_path();
        surface.move_to(Vec2::ZERO);
        surface.quadratic_to(Vec2::new(width * side, -length * 0.5), tip);
        surface.quadratic_to(Vec2::new(width * side * 0.5, -length * 0.5), Vec2::ZERO);
        surface.fill();

        surface.restore();
    }

    fn draw_head(&self, surface: &mut dyn Surface, wind: &WindState, scale: f64) {
        let bp = self.blueprint;

        surface.save();
        surface.set_shadow(bp.glow_color, PETAL_GLOW_BLUR * scale);
        for i in 0..bp.petal_count {
            let petal_wind = wind.sway(1.5, i as f64 * 0.5) * 0.55;

            surface.save();
            surface.rotate(i as f64 / bp.petal_count as f64 * TAU);
            surface.set_fill(Paint::linear(
                Vec2::ZERO,
                Vec2::new(0.0, -bp.petal_length * scale),
                bp.base_color,
                bp.tip_color,
            ));
            surface.begin_path();
            bp.petal_outline(scale, petal_wind, i).trace(surface);
            surface.fill();
            surface.restore();
        }
        surface.restore();

        surface.set_fill(Paint::Solid(bp.center_color));
        surface.begin_path();
        surface.circle(Vec2::ZERO, bp.center_radius * scale);
        surface.fill();
    }
}
