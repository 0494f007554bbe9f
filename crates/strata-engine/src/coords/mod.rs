//! Coordinate and geometry types shared by shapes and surfaces.
//!
//! Canonical space:
//! - Surface units (pixels for raster surfaces), `f64`
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod segment;
mod vec2;

pub use rect::Rect;
pub use segment::distance_to_segment;
pub use vec2::Vec2;
