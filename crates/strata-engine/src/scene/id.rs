use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Stable handle for a shape held by a [`ShapeList`](super::ShapeList).
///
/// Handles are unique for the whole process: no two lists ever hand out the
/// same value and a retired handle is never reissued, so a handle can only
/// match the shape it was minted for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    #[inline]
    pub(crate) fn mint() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}
