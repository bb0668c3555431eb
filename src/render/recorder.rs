//! Headless surface that records draw calls
//!
//! Lets the scene run without a browser and makes frames inspectable:
//! tests assert on the recorded commands instead of pixels.

use crate::math::Vec2;
use super::color::Rgba;
use super::surface::{Paint, Surface};

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f64),
    SetFill(Paint),
    SetShadow { color: Rgba, blur: f64 },
    BeginPath,
    MoveTo(Vec2),
    QuadraticTo { control: Vec2, to: Vec2 },
    CubicTo { control1: Vec2, control2: Vec2, to: Vec2 },
    Circle { center: Vec2, radius: f64 },
    ClosePath,
    Fill,
    FillRect { origin: Vec2, size: Vec2 },
    FillText { text: String, at: Vec2, font: String },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
    depth: usize,
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of fill operations (paths and rectangles)
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill | DrawCommand::FillRect { .. }))
            .count()
    }

    /// Texts drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Current save/restore nesting; zero when every save was restored
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drop recorded commands, keeping dimensions
    pub fn reset(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Canvas ignores an unbalanced restore; so do we
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_fill(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::SetFill(paint));
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.commands.push(DrawCommand::SetShadow { color, blur });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, to: Vec2) {
        self.commands.push(DrawCommand::MoveTo(to));
    }

    fn quadratic_to(&mut self, control: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::QuadraticTo { control, to });
    }

    fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::CubicTo { control1, control2, to });
    }

    fn circle(&mut self, center: Vec2, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::FillRect { origin, size });
    }

    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            font: font.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new(100.0, 50.0);
        surface.begin_path();
        surface.circle(Vec2::new(1.0, 2.0), 3.0);
        surface.fill();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::Circle { center: Vec2::new(1.0, 2.0), radius: 3.0 },
                DrawCommand::Fill,
            ]
        );
        assert_eq!(surface.fill_count(), 1);
    }

    #[test]
    fn test_depth_tracking() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.save();
        surface.save();
        surface.restore();
        assert_eq!(surface.depth(), 1);
        assert_eq!(surface.max_depth(), 2);
        surface.restore();
        surface.restore();
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_reset_keeps_size() {
        let mut surface = RecordingSurface::new(640.0, 480.0);
        surface.fill_text_centered("hi", Vec2::ZERO, "12px serif");
        assert_eq!(surface.texts(), vec!["hi"]);

        surface.reset();
        assert!(surface.is_empty());
        assert_eq!(surface.width(), 640.0);
        assert_eq!(surface.height(), 480.0);
    }
}
