pub mod fireflies;

pub use fireflies::Firefly;
