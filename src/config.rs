//! Scene configuration
//!
//! Every field has a default, so an empty document (or none at all) gives
//! the stock scene. YAML input only needs the values it overrides:
//!
//! ```yaml
//! message:
//!   recipient: Ana
//! flowers:
//!   species: [lily, lily, tulip]
//! seed: 7
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::flora::Species;

/// Placeholder replaced by the recipient in the message template
pub const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub message: MessageConfig,
    pub density: DensityConfig,
    pub wind: WindConfig,
    pub flowers: FlowerConfig,
    pub controls: ControlsConfig,
    /// Fixed RNG seed; random per session when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub recipient: String,
    pub template: String,
    pub font: String,
    /// Opacity added per frame once all flowers have grown
    pub fade_step: f64,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            recipient: "yoshi".to_string(),
            template: "¡Feliz día, {name}!".to_string(),
            font: r#"bold 48px "Trebuchet MS", sans-serif"#.to_string(),
            fade_step: 0.01,
        }
    }
}

impl MessageConfig {
    /// The greeting with the recipient filled in
    pub fn text(&self) -> String {
        self.template.replace(NAME_PLACEHOLDER, &self.recipient)
    }
}

/// Entity counts per unit of surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Stars per square pixel
    pub stars: f64,
    /// Fireflies per square pixel
    pub fireflies: f64,
    /// Grass blades per pixel of width
    pub grass: f64,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            stars: 0.00015,
            fireflies: 0.00004,
            grass: 0.5,
        }
    }
}

impl DensityConfig {
    pub fn star_count(&self, width: f64, height: f64) -> usize {
        count(width * height * self.stars)
    }

    pub fn firefly_count(&self, width: f64, height: f64) -> usize {
        count(width * height * self.fireflies)
    }

    pub fn grass_blade_count(&self, width: f64) -> usize {
        count(width * self.grass)
    }
}

fn count(amount: f64) -> usize {
    if amount.is_finite() && amount > 0.0 {
        amount.floor() as usize
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Phase advance in radians per millisecond
    pub speed: f64,
    /// Maximum horizontal displacement in pixels
    pub force: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            speed: 0.0003,
            force: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    pub count: usize,
    /// Horizontal distance between neighbouring flowers in pixels
    pub spacing: f64,
    /// Extra start delay per flower in milliseconds
    pub stagger_ms: f64,
    /// Species cycled through by flower index
    pub species: Vec<Species>,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            count: 3,
            spacing: 90.0,
            stagger_ms: 600.0,
            species: Species::ALL.to_vec(),
        }
    }
}

impl FlowerConfig {
    pub fn species_for(&self, index: usize) -> Species {
        if self.species.is_empty() {
            Species::ALL[index % Species::ALL.len()]
        } else {
            self.species[index % self.species.len()]
        }
    }
}

/// Labels for the pause control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub pause_label: String,
    pub resume_label: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            pause_label: "Pausar".to_string(),
            resume_label: "Reanudar".to_string(),
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = if yaml.trim().is_empty() {
            SceneConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let densities = [
            ("density.stars", self.density.stars),
            ("density.fireflies", self.density.fireflies),
            ("density.grass", self.density.grass),
        ];
        for (field, value) in densities {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(field, format!("must be a non-negative number, got {}", value)));
            }
        }

        if !self.wind.speed.is_finite() {
            return Err(ConfigError::invalid("wind.speed", "must be finite"));
        }
        if !self.wind.force.is_finite() {
            return Err(ConfigError::invalid("wind.force", "must be finite"));
        }

        let step = self.message.fade_step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(ConfigError::invalid("message.fade_step", format!("must be in (0, 1], got {}", step)));
        }

        if !self.flowers.spacing.is_finite() {
            return Err(ConfigError::invalid("flowers.spacing", "must be finite"));
        }
        if !self.flowers.stagger_ms.is_finite() || self.flowers.stagger_ms < 0.0 {
            return Err(ConfigError::invalid("flowers.stagger_ms", "must be a non-negative number"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.message.text(), "¡Feliz día, yoshi!");
        assert_eq!(config.flowers.count, 3);
        assert_eq!(config.wind.force, 15.0);
        assert_eq!(config.controls.pause_label, "Pausar");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_counts_for_800_by_600() {
        let density = DensityConfig::default();
        assert_eq!(density.star_count(800.0, 600.0), 72);
        assert_eq!(density.firefly_count(800.0, 600.0), 19);
        assert_eq!(density.grass_blade_count(800.0), 400);
    }

    #[test]
    fn test_counts_for_empty_surface() {
        let density = DensityConfig::default();
        assert_eq!(density.star_count(0.0, 0.0), 0);
        assert_eq!(density.firefly_count(0.0, 600.0), 0);
        assert_eq!(density.grass_blade_count(0.0), 0);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
message:
  recipient: Ana
flowers:
  species: [lily, tulip]
seed: 7
"#;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.message.text(), "¡Feliz día, Ana!");
        assert_eq!(config.message.fade_step, 0.01);
        assert_eq!(config.flowers.count, 3);
        assert_eq!(config.flowers.species_for(2), Species::Lily);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(SceneConfig::from_yaml("  \n").unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_template_without_placeholder() {
        let message = MessageConfig {
            template: "Buenas noches".to_string(),
            ..Default::default()
        };
        assert_eq!(message.text(), "Buenas noches");
    }

    #[test]
    fn test_rejects_negative_density() {
        let err = SceneConfig::from_yaml("density:\n  stars: -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "density.stars", .. }));
    }

    #[test]
    fn test_rejects_bad_fade_step() {
        let err = SceneConfig::from_yaml("message:\n  fade_step: 0\n").unwrap_err();
        assert!(err.to_string().contains("message.fade_step"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = SceneConfig::from_yaml("density: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_species_list_uses_all() {
        let flowers = FlowerConfig {
            species: Vec::new(),
            ..Default::default()
        };
        assert_eq!(flowers.species_for(4), Species::Tulip);
    }
}
