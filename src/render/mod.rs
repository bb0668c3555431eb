pub mod color;
pub mod surface;
pub mod recorder;
pub mod canvas2d;

pub use color::Rgba;
pub use surface::{ColorStop, Paint, Surface};
pub use recorder::{DrawCommand, RecordingSurface};
pub use canvas2d::Canvas2dSurface;
