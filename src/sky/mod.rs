//! Sky layers: gradient backdrop, twinkling stars and the orbiting moon

pub mod background;
pub mod stars;
pub mod moon;

pub use background::Background;
pub use stars::Star;
pub use moon::{Crater, Moon};
