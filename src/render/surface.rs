use crate::math::Vec2;
use super::color::Rgba;

/// One color stop of a gradient, `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Fill style for paths and rectangles
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
    Radial {
        center: Vec2,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    /// Two-stop linear gradient from `start` at `from` to `end` at `to`
    pub fn linear(from: Vec2, to: Vec2, start: Rgba, end: Rgba) -> Self {
        Paint::Linear {
            from,
            to,
            stops: two_stops(start, end),
        }
    }

    /// Two-stop radial gradient between concentric circles
    pub fn radial(center: Vec2, inner_radius: f64, outer_radius: f64, start: Rgba, end: Rgba) -> Self {
        Paint::Radial {
            center,
            inner_radius,
            outer_radius,
            stops: two_stops(start, end),
        }
    }
}

fn two_stops(start: Rgba, end: Rgba) -> Vec<ColorStop> {
    vec![
        ColorStop { offset: 0.0, color: start },
        ColorStop { offset: 1.0, color: end },
    ]
}

/// Immediate-mode 2D drawing target.
///
/// Mirrors the subset of the canvas 2D context the scene draws with: a
/// save/restore transform stack, one current fill and shadow, and a current
/// path built from lines and bezier segments.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Erase the whole surface to transparent
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f64);

    fn set_fill(&mut self, paint: Paint);
    /// Blurred halo painted behind subsequent fills; zero blur disables it
    fn set_shadow(&mut self, color: Rgba, blur: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, to: Vec2);
    fn quadratic_to(&mut self, control: Vec2, to: Vec2);
    fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2);
    /// Full circle as a closed sub-path
    fn circle(&mut self, center: Vec2, radius: f64);
    fn close_path(&mut self);
    fn fill(&mut self);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    /// Fill `text` horizontally centered on `at`
    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str);
}
