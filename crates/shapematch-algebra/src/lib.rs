#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Angle helpers in radians.
pub mod angle;

mod vec2;
pub use vec2::Vec2;
