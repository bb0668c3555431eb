use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::math::Vec2;
use super::color::Rgba;
use super::surface::{ColorStop, Paint, Surface};

/// Surface backed by a browser canvas 2D context
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Set the backing store size in pixels
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn gradient(&self, paint: &Paint) -> Result<Option<CanvasGradient>, JsValue> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return Ok(None),
            Paint::Linear { from, to, stops } => {
                (self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y), stops)
            }
            Paint::Radial { center, inner_radius, outer_radius, stops } => (
                self.ctx.create_radial_gradient(
                    center.x,
                    center.y,
                    inner_radius.max(0.0),
                    center.x,
                    center.y,
                    outer_radius.max(0.0),
                )?,
                stops,
            ),
        };

        for ColorStop { offset, color } in stops {
            gradient.add_color_stop(*offset as f32, &color.to_css())?;
        }
        Ok(Some(gradient))
    }
}

/// Canvas calls only fail on invalid arguments; report and keep drawing
fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("canvas {} failed: {:?}", op, e);
    }
}

impl Surface for Canvas2dSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        report("translate", self.ctx.translate(offset.x, offset.y));
    }

    fn rotate(&mut self, angle: f64) {
        report("rotate", self.ctx.rotate(angle));
    }

    fn set_fill(&mut self, paint: Paint) {
        match self.gradient(&paint) {
            Ok(Some(gradient)) => self.ctx.set_fill_style_canvas_gradient(&gradient),
            Ok(None) => {
                if let Paint::Solid(color) = paint {
                    self.ctx.set_fill_style_str(&color.to_css());
                }
            }
            Err(e) => log::warn!("canvas gradient rejected: {:?}", e),
        }
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur.max(0.0));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, to: Vec2) {
        self.ctx.move_to(to.x, to.y);
    }

    fn quadratic_to(&mut self, control: Vec2, to: Vec2) {
        self.ctx.quadratic_curve_to(control.x, control.y, to.x, to.y);
    }

    fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        self.ctx
            .bezier_curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y);
    }

    fn circle(&mut self, center: Vec2, radius: f64) {
        report(
            "arc",
            self.ctx
                .arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU),
        );
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        report("fill_text", self.ctx.fill_text(text, at.x, at.y));
    }
}
