use super::wind::WindState;

/// Mutable scene-wide state, rebuilt with the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub wind: WindState,
    /// Latched once every flower has grown
    pub all_flowers_grown: bool,
    /// Completion message opacity in [0, 1]
    pub message_alpha: f64,
}

impl SceneState {
    pub fn new(wind: WindState) -> Self {
        Self {
            wind,
            all_flowers_grown: false,
            message_alpha: 0.0,
        }
    }

    /// Latch completion when `grown` is true; returns true on the frame it flips
    pub fn observe_growth(&mut self, grown: bool) -> bool {
        if self.all_flowers_grown || !grown {
            return false;
        }
        self.all_flowers_grown = true;
        true
    }

    /// Raise the message opacity by `step`, only after completion
    pub fn fade_in_message(&mut self, step: f64) {
        if self.all_flowers_grown && self.message_alpha < 1.0 {
            self.message_alpha = (self.message_alpha + step).min(1.0);
        }
    }
}
