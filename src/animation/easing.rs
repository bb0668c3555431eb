//! Easing functions for growth animations

use std::f64::consts::PI;

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Fast start, long gentle finish (stems and petals)
    #[default]
    EaseOutCubic,
    /// Overshoots and rings before settling
    ElasticOut,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f64, easing: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseOutCubic => ease_out_cubic(t),
        Easing::ElasticOut => {
            if t == 0.0 || t == 1.0 {
                return t;
            }
            let c4 = (2.0 * PI) / 3.0;
            2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
        }
    }
}

/// `1 - (1 - t)^3`
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
