//! Color resolution for raster surfaces.
//!
//! Shapes store color descriptors opaquely; only surfaces that actually
//! rasterize need to turn a descriptor into channel values.

pub mod color;

pub use color::{Color, ColorParseError};
