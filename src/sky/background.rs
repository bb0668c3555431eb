use crate::math::Vec2;
use crate::render::{Paint, Rgba, Surface};

const SKY_CENTER: Rgba = Rgba::hex(0x0A0A20);
const SKY_EDGE: Rgba = Rgba::hex(0x000010);
const VIGNETTE: Rgba = Rgba::new(0, 0, 0, 0.4);

/// Night sky gradient with a darkened vignette
#[derive(Debug, Clone, Copy, Default)]
pub struct Background;

impl Background {
    pub fn draw(&self, surface: &mut dyn Surface) {
        let (w, h) = (surface.width(), surface.height());
        let center = Vec2::new(w / 2.0, h / 2.0);
        let size = Vec2::new(w, h);

        surface.set_fill(Paint::radial(center, 0.0, w.max(h) / 1.5, SKY_CENTER, SKY_EDGE));
        surface.fill_rect(Vec2::ZERO, size);

        surface.set_fill(Paint::radial(
            center,
            w / 3.0,
            w / 1.5,
            Rgba::TRANSPARENT,
            VIGNETTE,
        ));
        surface.fill_rect(Vec2::ZERO, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_background_covers_surface() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        Background.draw(&mut surface);

        assert_eq!(surface.fill_count(), 2);
        let sky = surface.commands().iter().find_map(|c| match c {
            DrawCommand::SetFill(Paint::Radial { outer_radius, .. }) => Some(*outer_radius),
            _ => None,
        });
        assert!((sky.unwrap() - 800.0 / 1.5).abs() < 1e-9);
        assert!(surface.commands().contains(&DrawCommand::FillRect {
            origin: Vec2::ZERO,
            size: Vec2::new(800.0, 600.0),
        }));
    }
}
