use crate::coords::{Rect, Vec2};
use crate::surface::Surface;

/// Axis-aligned rectangle geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectShape {
    pub width: f64,
    pub height: f64,
}

impl RectShape {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub(super) fn contains(&self, origin: Vec2, p: Vec2) -> bool {
        self.bounds(origin).contains(p)
    }

    pub(super) fn draw<S: Surface + ?Sized>(&self, origin: Vec2, surface: &mut S) {
        surface.fill_rect(origin.x, origin.y, self.width, self.height);
    }

    pub(super) fn bounds(&self, origin: Vec2) -> Rect {
        Rect::from_origin_size(origin, Vec2::new(self.width, self.height))
    }
}
