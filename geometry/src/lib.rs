//! # Nightbloom Geometry
//!
//! Bounds, rectangles and screen-space conversions shared by the
//! Nightbloom tool crates.

pub mod bounds;
pub mod camera;
pub mod math;
pub mod overlap;
pub mod rect;

/// Geometry library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
