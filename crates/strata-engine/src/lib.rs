//! Strata engine crate.
//!
//! Z-ordered 2-D scenes: a closed set of shapes with a uniform draw/hit-test
//! contract, a layered container with re-layering and topmost-hit picking,
//! and the drawing-surface contract they render through.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;

pub use scene::{Shape, ShapeId, ShapeKind, ShapeList, ShapeListError};
pub use surface::Surface;
