//! Lifecycle controller around a scene
//!
//! `Garden` is what the host drives: it feeds frame timestamps through the
//! playback clock, rebuilds the scene on resize and restart, and tracks the
//! pause flag behind the pause/resume control. It never schedules frames
//! itself; the return values tell the host whether to keep requesting them.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::animation::{Playback, Tick};
use crate::config::SceneConfig;
use crate::render::Surface;
use crate::scene::Scene;

/// What happened to a frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Scene advanced and drawn; schedule the next frame
    Rendered,
    /// Timestamp rejected, surface untouched; schedule the next frame
    Skipped,
    /// Paused; stop scheduling until resumed
    Paused,
}

impl FrameOutcome {
    pub fn wants_next_frame(&self) -> bool {
        !matches!(self, FrameOutcome::Paused)
    }
}

pub struct Garden {
    config: SceneConfig,
    rng: SmallRng,
    scene: Scene,
    playback: Playback,
}

impl Garden {
    /// Build the first scene. `config.seed`, when set, wins over `seed`.
    pub fn new(config: SceneConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed.unwrap_or(seed));
        let scene = Scene::new(&config, width, height, &mut rng);

        Self {
            config,
            rng,
            scene,
            playback: Playback::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    /// Label for the pause control: the action it will perform next
    pub fn pause_label(&self) -> &str {
        if self.is_paused() {
            &self.config.controls.resume_label
        } else {
            &self.config.controls.pause_label
        }
    }

    /// Run one animation frame at `timestamp` (milliseconds)
    pub fn frame(&mut self, surface: &mut dyn Surface, timestamp: f64) -> FrameOutcome {
        match self.playback.tick(timestamp) {
            Tick::Advance(delta) => {
                self.scene.frame(surface, timestamp, delta);
                FrameOutcome::Rendered
            }
            Tick::Skip => FrameOutcome::Skipped,
            Tick::Paused => FrameOutcome::Paused,
        }
    }

    /// Flip the pause flag. Resuming restarts the clock from `now`.
    /// Returns true when the host should start requesting frames again.
    pub fn toggle_pause(&mut self, now: f64) -> bool {
        if self.is_paused() {
            self.playback.resume(now);
            log::info!("animation resumed");
            true
        } else {
            self.playback.pause();
            log::info!("animation paused");
            false
        }
    }

    /// Rebuild the scene for the surface's current size. While paused the
    /// new scene is drawn once so the surface is not left blank.
    /// Returns true when the host should keep requesting frames. A frame may
    /// already be pending then; the host cancels it before requesting another
    /// so only one loop runs.
    pub fn resize(&mut self, surface: &mut dyn Surface) -> bool {
        self.rebuild(surface.width(), surface.height());
        if self.is_paused() {
            self.scene.draw_static(surface);
            false
        } else {
            true
        }
    }

    /// Unpause and start over with a fresh scene
    pub fn restart(&mut self, surface: &mut dyn Surface) -> bool {
        self.playback = Playback::new();
        self.resize(surface)
    }

    /// Redraw without advancing time
    pub fn draw_static(&self, surface: &mut dyn Surface) {
        self.scene.draw_static(surface);
    }

    /// Change who the greeting is addressed to
    pub fn set_recipient(&mut self, recipient: &str) {
        self.config.message.recipient = recipient.to_string();
        self.scene.set_message_text(self.config.message.text());
    }

    fn rebuild(&mut self, width: f64, height: f64) {
        self.scene = Scene::new(&self.config, width, height, &mut self.rng);
        self.playback.rewind();
    }
}
