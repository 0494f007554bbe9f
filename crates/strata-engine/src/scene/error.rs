use std::fmt;

use super::ShapeId;

/// Failure of a [`ShapeList`](super::ShapeList) operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeListError {
    /// The handle does not refer to a shape in this list.
    NotFound(ShapeId),
}

impl fmt::Display for ShapeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeListError::NotFound(id) => write!(f, "{id} not found in shape list"),
        }
    }
}

impl std::error::Error for ShapeListError {}
