use crate::coords::{Rect, Vec2};
use crate::surface::Surface;

/// Square geometry: edge length, extending right and down from the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareShape {
    pub size: f64,
}

impl SquareShape {
    #[inline]
    pub const fn new(size: f64) -> Self {
        Self { size }
    }

    pub(super) fn contains(&self, origin: Vec2, p: Vec2) -> bool {
        self.bounds(origin).contains(p)
    }

    pub(super) fn draw<S: Surface + ?Sized>(&self, origin: Vec2, surface: &mut S) {
        surface.fill_rect(origin.x, origin.y, self.size, self.size);
    }

    pub(super) fn bounds(&self, origin: Vec2) -> Rect {
        Rect::from_origin_size(origin, Vec2::new(self.size, self.size))
    }
}
