//! Per-species flower geometry and colors
//!
//! Species differ only by a constant table and the curve family used for
//! their petals. Petal outlines are computed as plain data so they can be
//! inspected without drawing.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::render::{Rgba, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Daisy,
    Tulip,
    Lily,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Daisy, Species::Tulip, Species::Lily];

    pub fn blueprint(&self) -> &'static FlowerBlueprint {
        match self {
            Species::Daisy => &DAISY,
            Species::Tulip => &TULIP,
            Species::Lily => &LILY,
        }
    }
}

/// Immutable species parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerBlueprint {
    pub species: Species,
    pub petal_count: usize,
    pub petal_length: f64,
    pub petal_width: f64,
    pub center_radius: f64,
    pub base_color: Rgba,
    pub tip_color: Rgba,
    pub center_color: Rgba,
    pub glow_color: Rgba,
}

pub static DAISY: FlowerBlueprint = FlowerBlueprint {
    species: Species::Daisy,
    petal_count: 16,
    petal_length: 60.0,
    petal_width: 15.0,
    center_radius: 15.0,
    base_color: Rgba::new(255, 255, 255, 0.8),
    tip_color: Rgba::new(240, 240, 255, 0.2),
    center_color: Rgba::hex(0xD4AC0D),
    glow_color: Rgba::new(255, 255, 220, 0.3),
};

pub static TULIP: FlowerBlueprint = FlowerBlueprint {
    species: Species::Tulip,
    petal_count: 6,
    petal_length: 55.0,
    petal_width: 35.0,
    center_radius: 5.0,
    base_color: Rgba::new(255, 192, 203, 0.8),
    tip_color: Rgba::new(255, 105, 180, 0.3),
    center_color: Rgba::hex(0xF1C40F),
    glow_color: Rgba::new(255, 182, 193, 0.4),
};

pub static LILY: FlowerBlueprint = FlowerBlueprint {
    species: Species::Lily,
    petal_count: 6,
    petal_length: 70.0,
    petal_width: 25.0,
    center_radius: 8.0,
    base_color: Rgba::new(255, 255, 224, 0.8),
    tip_color: Rgba::new(255, 255, 0, 0.3),
    center_color: Rgba::hex(0xAF601A),
    glow_color: Rgba::new(255, 255, 180, 0.4),
};

/// One side of a petal, from the previous point to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PetalEdge {
    Quadratic { control: Vec2, to: Vec2 },
    Cubic { control1: Vec2, control2: Vec2, to: Vec2 },
}

impl PetalEdge {
    pub fn end(&self) -> Vec2 {
        match *self {
            PetalEdge::Quadratic { to, .. } | PetalEdge::Cubic { to, .. } => to,
        }
    }
}

/// Closed petal outline starting and ending at the flower head origin,
/// pointing up (negative y) before rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalOutline {
    /// Outward edge to the tip, then the return edge to the origin
    pub edges: [PetalEdge; 2],
}

impl PetalOutline {
    pub fn tip(&self) -> Vec2 {
        self.edges[0].end()
    }

    /// Append the outline to the current path
    pub fn trace(&self, surface: &mut dyn Surface) {
        surface.move_to(Vec2::ZERO);
        for edge in &self.edges {
            match *edge {
                PetalEdge::Quadratic { control, to } => surface.quadratic_to(control, to),
                PetalEdge::Cubic { control1, control2, to } => surface.cubic_to(control1, control2, to),
            }
        }
    }
}

impl FlowerBlueprint {
    /// Petal outline at growth `scale`, with the tip pushed sideways by `wind`
    pub fn petal_outline(&self, scale: f64, wind: f64, index: usize) -> PetalOutline {
        let length = self.petal_length;
        let width = self.petal_width;
        let (l, w) = (length * scale, width * scale);

        let edges = match self.species {
            Species::Daisy => [
                PetalEdge::Quadratic {
                    control: Vec2::new(w / 2.0 + wind, -l * 0.5),
                    to: Vec2::new(wind, -l),
                },
                PetalEdge::Quadratic {
                    control: Vec2::new(-w / 2.0 + wind, -l * 0.5),
                    to: Vec2::ZERO,
                },
            ],
            Species::Tulip => {
                // Alternate petals lean opposite ways; even ones sit lower
                let even = index % 2 == 0;
                let lean = if even { -0.1 } else { 0.1 };
                let tip_drop = if even { length * 0.2 } else { 0.0 };
                [
                    PetalEdge::Cubic {
                        control1: Vec2::new(w * lean + wind, -l * 0.3),
                        control2: Vec2::new(w * 0.5 + wind, -l * 0.7),
                        to: Vec2::new(wind, -l + tip_drop * scale),
                    },
                    PetalEdge::Cubic {
                        control1: Vec2::new(-w * 0.5 + wind, -l * 0.7),
                        control2: Vec2::new(-w * lean + wind, -l * 0.3),
                        to: Vec2::ZERO,
                    },
                ]
            }
            Species::Lily => {
                let tip_bend = -w * 0.8;
                [
                    PetalEdge::Cubic {
                        control1: Vec2::new(w + wind, -l * 0.5),
                        control2: Vec2::new(tip_bend + wind, -l * 0.9),
                        to: Vec2::new(wind, -l),
                    },
                    PetalEdge::Cubic {
                        control1: Vec2::new(-tip_bend + wind, -l * 0.9),
                        control2: Vec2::new(-w + wind, -l * 0.5),
                        to: Vec2::ZERO,
                    },
                ]
            }
        };

        PetalOutline { edges }
    }
}
