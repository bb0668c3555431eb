//! Ground-level plants: wind-blown grass and growing flowers

pub mod blueprint;
pub mod grass;
pub mod flower;

pub use blueprint::{FlowerBlueprint, PetalEdge, PetalOutline, Species};
pub use grass::{Grass, GrassBlade};
pub use flower::{Flower, Leaf, LeafSide};
