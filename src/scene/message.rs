use crate::math::Vec2;
use crate::render::{Paint, Rgba, Surface};

const TEXT_COLOR: Rgba = Rgba::new(255, 255, 255, 1.0);
const GLOW_COLOR: Rgba = Rgba::new(255, 255, 220, 1.0);
const GLOW_BLUR: f64 = 15.0;

/// Glowing greeting drawn centered on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionMessage {
    pub text: String,
    pub font: String,
}

impl CompletionMessage {
    pub fn new(text: impl Into<String>, font: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, alpha: f64) {
        let center = Vec2::new(surface.width() / 2.0, surface.height() / 2.0);

        surface.save();
        surface.set_fill(Paint::Solid(TEXT_COLOR.with_alpha(alpha)));
        surface.set_shadow(GLOW_COLOR.with_alpha(alpha * 0.7), GLOW_BLUR);
        surface.fill_text_centered(&self.text, center, &self.font);
        surface.restore();
    }
}
