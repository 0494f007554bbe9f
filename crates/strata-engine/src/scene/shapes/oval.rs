use crate::coords::{Rect, Vec2};
use crate::surface::Surface;

/// Ellipse inscribed in the `width` × `height` box at the shape origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OvalShape {
    pub width: f64,
    pub height: f64,
}

impl OvalShape {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `((x - h) / a)² + ((y - k) / b)² <= 1`, boundary inclusive.
    ///
    /// A box with no area holds no ellipse, so both radii must be positive.
    pub(super) fn contains(&self, origin: Vec2, p: Vec2) -> bool {
        let a = self.width / 2.0;
        let b = self.height / 2.0;
        if !(a > 0.0 && b > 0.0) {
            return false;
        }
        let c = self.bounds(origin).center();
        let nx = (p.x - c.x) / a;
        let ny = (p.y - c.y) / b;
        nx * nx + ny * ny <= 1.0
    }

    pub(super) fn draw<S: Surface + ?Sized>(&self, origin: Vec2, surface: &mut S) {
        surface.fill_oval(origin.x, origin.y, self.width, self.height);
    }

    pub(super) fn bounds(&self, origin: Vec2) -> Rect {
        Rect::from_origin_size(origin, Vec2::new(self.width, self.height))
    }
}
