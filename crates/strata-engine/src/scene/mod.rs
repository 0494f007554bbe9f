//! Scene model.
//!
//! Responsibilities:
//! - the closed set of shapes and their draw/hit-test contract
//! - z-ordered storage with re-layering and topmost-hit picking
//! - keep geometry per shape isolated under `scene::shapes`

mod error;
mod id;
mod list;

pub mod shapes;

pub use error::ShapeListError;
pub use id::ShapeId;
pub use list::ShapeList;
pub use shapes::{Shape, ShapeKind, DEFAULT_COLOR, LINE_HIT_TOLERANCE};
