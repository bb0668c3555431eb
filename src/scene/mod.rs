//! Scene orchestration
//!
//! A `Scene` owns every entity for one surface size. It is built in one go
//! from the config and the current dimensions and is thrown away on resize
//! or restart; nothing is added or removed while it runs.
//!
//! Each frame advances the wind, then updates and draws the layers back to
//! front: background, stars, moon, grass, flowers, fireflies, and finally
//! the completion message once every flower has grown.

pub mod wind;
pub mod state;
pub mod message;

pub use wind::WindState;
pub use state::SceneState;
pub use message::CompletionMessage;

use rand::Rng;

use crate::config::SceneConfig;
use crate::flora::{Flower, Grass};
use crate::particles::Firefly;
use crate::render::Surface;
use crate::sky::{Background, Moon, Star};

pub struct Scene {
    width: f64,
    height: f64,
    background: Background,
    moon: Moon,
    stars: Vec<Star>,
    fireflies: Vec<Firefly>,
    grass: Grass,
    flowers: Vec<Flower>,
    message: CompletionMessage,
    fade_step: f64,
    state: SceneState,
}

impl Scene {
    pub fn new(config: &SceneConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let ground_level = height;
        let density = &config.density;

        let moon = Moon::new(rng, width, height);
        let stars = (0..density.star_count(width, height))
            .map(|_| Star::random(rng, width, height))
            .collect::<Vec<_>>();
        let fireflies = (0..density.firefly_count(width, height))
            .map(|_| Firefly::random(rng, width, ground_level))
            .collect::<Vec<_>>();
        let grass = Grass::new(rng, width, ground_level, density.grass_blade_count(width));

        let flower_config = &config.flowers;
        let center_index = flower_config.count.saturating_sub(1) as f64 / 2.0;
        let flowers = (0..flower_config.count)
            .map(|i| {
                let x = width / 2.0 + (i as f64 - center_index) * flower_config.spacing;
                let delay = i as f64 * flower_config.stagger_ms;
                Flower::new(rng, x, ground_level, flower_config.species_for(i), delay)
            })
            .collect::<Vec<_>>();

        log::info!(
            "scene built for {}x{}: {} stars, {} fireflies, {} grass blades, {} flowers",
            width,
            height,
            stars.len(),
            fireflies.len(),
            grass.blades.len(),
            flowers.len()
        );

        Self {
            width,
            height,
            background: Background,
            moon,
            stars,
            fireflies,
            grass,
            flowers,
            message: CompletionMessage::new(config.message.text(), config.message.font.clone()),
            fade_step: config.message.fade_step,
            state: SceneState::new(WindState::new(config.wind.speed, config.wind.force)),
        }
    }

    /// Advance all time-based state to `timestamp` and draw the frame.
    ///
    /// `delta` is the time since the previous frame and only drives the
    /// wind; stars, moon, fireflies and flowers read the raw timestamp.
    pub fn frame(&mut self, surface: &mut dyn Surface, timestamp: f64, delta: f64) {
        self.state.wind.advance(delta);

        for star in &mut self.stars {
            star.update(timestamp);
        }
        self.moon.update(timestamp);
        for flower in &mut self.flowers {
            flower.update(timestamp);
        }
        for firefly in &mut self.fireflies {
            firefly.update(timestamp);
        }

        self.draw_layers(surface);

        let grown = self.flowers.iter().all(Flower::is_grown);
        if self.state.observe_growth(grown) {
            log::debug!("all {} flowers grown at {:.0}ms", self.flowers.len(), timestamp);
        }
        self.state.fade_in_message(self.fade_step);

        if self.state.message_alpha > 0.0 {
            self.message.draw(surface, self.state.message_alpha);
        }
    }

    /// Redraw the current state without advancing time, as while paused
    pub fn draw_static(&self, surface: &mut dyn Surface) {
        self.draw_layers(surface);
        if self.state.all_flowers_grown {
            self.message.draw(surface, 1.0);
        }
    }

    fn draw_layers(&self, surface: &mut dyn Surface) {
        let wind = &self.state.wind;

        surface.clear();
        self.background.draw(surface);
        for star in &self.stars {
            star.draw(surface);
        }
        self.moon.draw(surface);
        self.grass.draw(surface, wind);
        for flower in &self.flowers {
            flower.draw(surface, wind);
        }
        for firefly in &self.fireflies {
            firefly.draw(surface);
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    pub fn grass(&self) -> &Grass {
        &self.grass
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn message(&self) -> &CompletionMessage {
        &self.message
    }

    pub fn set_message_text(&mut self, text: impl Into<String>) {
        self.message.text = text.into();
    }
}
