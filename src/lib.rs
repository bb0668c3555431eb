use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub mod animation;
pub mod config;
pub mod error;
pub mod flora;
pub mod garden;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;
pub mod sky;

pub use config::SceneConfig;
pub use error::ConfigError;
pub use garden::{FrameOutcome, Garden};
pub use scene::Scene;

use render::{Canvas2dSurface, Surface};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

/// Scene engine exposed to JavaScript.
///
/// The page owns the animation loop and the controls:
///
/// ```js
/// const garden = new NightGarden(canvas);
/// let pending = null;
/// const loop = (t) => {
///   pending = garden.frame(t) ? requestAnimationFrame(loop) : null;
/// };
/// const restartLoop = (run) => {
///   if (pending !== null) cancelAnimationFrame(pending);
///   pending = run ? requestAnimationFrame(loop) : null;
/// };
/// restartLoop(garden.resize(innerWidth, innerHeight));
/// addEventListener("resize", () => restartLoop(garden.resize(innerWidth, innerHeight)));
/// restartButton.onclick = () => restartLoop(garden.restart());
/// pauseButton.onclick = () => {
///   if (garden.toggle_pause(performance.now())) restartLoop(true);
///   pauseButton.textContent = garden.pause_label();
/// };
/// ```
///
/// `resize` and `restart` return true while running, when a frame is usually
/// already pending. Cancel it before requesting a new one, otherwise two
/// loops run and per-frame motion doubles.
#[wasm_bindgen]
pub struct NightGarden {
    surface: Canvas2dSurface,
    garden: Garden,
}

#[wasm_bindgen]
impl NightGarden {
    /// Create an engine with the default scene
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<NightGarden, JsValue> {
        Self::with_config(canvas, "")
    }

    /// Create an engine from a YAML scene config
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<NightGarden, JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(to_js)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2D context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let surface = Canvas2dSurface::new(canvas, ctx);

        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
        let garden = Garden::new(config, surface.width(), surface.height(), seed);

        Ok(Self { surface, garden })
    }

    /// Advance and draw one frame. Returns whether to request another.
    #[wasm_bindgen]
    pub fn frame(&mut self, timestamp: f64) -> bool {
        self.garden.frame(&mut self.surface, timestamp).wants_next_frame()
    }

    /// Resize the canvas and rebuild the scene.
    /// Returns whether the animation loop should run; cancel any pending
    /// frame before requesting a new one.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.surface.set_size(width, height);
        self.garden.resize(&mut self.surface)
    }

    /// Toggle pause. Returns true when the loop should be restarted.
    #[wasm_bindgen]
    pub fn toggle_pause(&mut self, now: f64) -> bool {
        self.garden.toggle_pause(now)
    }

    /// Text for the pause control
    #[wasm_bindgen]
    pub fn pause_label(&self) -> String {
        self.garden.pause_label().to_string()
    }

    /// Unpause and rebuild the scene from scratch. Same return contract as `resize`.
    #[wasm_bindgen]
    pub fn restart(&mut self) -> bool {
        self.garden.restart(&mut self.surface)
    }

    /// Redraw the current state without advancing time
    #[wasm_bindgen]
    pub fn draw_static_frame(&mut self) {
        self.garden.draw_static(&mut self.surface);
    }

    /// Change the name in the greeting
    #[wasm_bindgen]
    pub fn set_recipient(&mut self, name: &str) {
        self.garden.set_recipient(name);
    }

    #[wasm_bindgen]
    pub fn is_paused(&self) -> bool {
        self.garden.is_paused()
    }

    #[wasm_bindgen]
    pub fn all_flowers_grown(&self) -> bool {
        self.garden.scene().state().all_flowers_grown
    }

    #[wasm_bindgen]
    pub fn message_alpha(&self) -> f64 {
        self.garden.scene().state().message_alpha
    }
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = SceneConfig::from_yaml("wind:\n  speed: .nan\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid config value for `wind.speed`: must be finite");
    }
}
