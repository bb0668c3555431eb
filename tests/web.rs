//! Browser tests for the canvas backend and the wasm entry point.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use night_garden::math::Vec2;
use night_garden::render::{Canvas2dSurface, Paint, Rgba, Surface};
use night_garden::NightGarden;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

fn surface(width: u32, height: u32) -> Canvas2dSurface {
    let canvas = canvas(width, height);
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    Canvas2dSurface::new(canvas, ctx)
}

#[wasm_bindgen_test]
fn test_surface_reports_canvas_size() {
    let mut surface = surface(320, 240);
    assert_eq!(surface.width(), 320.0);
    assert_eq!(surface.height(), 240.0);

    surface.set_size(640, 480);
    assert_eq!(surface.width(), 640.0);
    assert_eq!(surface.height(), 480.0);
    surface.clear();
}

#[wasm_bindgen_test]
fn test_surface_accepts_every_paint() {
    let mut surface = surface(100, 100);
    let center = Vec2::new(50.0, 50.0);

    surface.set_fill(Paint::Solid(Rgba::new(255, 0, 0, 1.0)));
    surface.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0));

    surface.set_fill(Paint::linear(
        Vec2::ZERO,
        Vec2::new(0.0, 100.0),
        Rgba::hex(0x0b1026),
        Rgba::hex(0x2b1b3d),
    ));
    surface.fill_rect(Vec2::ZERO, Vec2::new(100.0, 100.0));

    surface.set_fill(Paint::radial(center, 0.0, 40.0, Rgba::hex(0xffffff), Rgba::TRANSPARENT));
    surface.begin_path();
    surface.circle(center, 40.0);
    surface.fill();
}

#[wasm_bindgen_test]
fn test_surface_draws_curves_and_text() {
    let mut surface = surface(200, 200);
    surface.save();
    surface.translate(Vec2::new(100.0, 100.0));
    surface.rotate(0.5);
    surface.set_shadow(Rgba::new(255, 255, 220, 0.7), 15.0);
    surface.begin_path();
    surface.move_to(Vec2::ZERO);
    surface.quadratic_to(Vec2::new(10.0, -20.0), Vec2::new(0.0, -40.0));
    surface.cubic_to(Vec2::new(-5.0, -30.0), Vec2::new(-10.0, -10.0), Vec2::ZERO);
    surface.close_path();
    surface.fill();
    surface.restore();
    surface.fill_text_centered("hola", Vec2::new(100.0, 50.0), "bold 24px serif");
}

#[wasm_bindgen_test]
fn test_engine_runs_frames_and_pauses() {
    let mut garden = NightGarden::new(canvas(800, 600)).unwrap();
    assert!(garden.frame(0.0));
    assert!(garden.frame(16.0));

    assert!(!garden.toggle_pause(20.0));
    assert!(garden.is_paused());
    assert!(!garden.frame(32.0));

    assert!(garden.toggle_pause(40.0));
    assert!(!garden.is_paused());
    assert!(garden.frame(48.0));
}

#[wasm_bindgen_test]
fn test_engine_grows_and_shows_message() {
    let mut garden = NightGarden::new(canvas(800, 600)).unwrap();
    let mut t = 0.0;
    while t <= 13_000.0 {
        garden.frame(t);
        t += 100.0;
    }
    assert!(garden.all_flowers_grown());
    assert!(garden.message_alpha() > 0.0);

    garden.resize(400, 300);
    assert!(!garden.all_flowers_grown());
    assert_eq!(garden.message_alpha(), 0.0);
}

#[wasm_bindgen_test]
fn test_engine_rejects_bad_config() {
    assert!(NightGarden::with_config(canvas(10, 10), "density: [").is_err());
}
