use crate::coords::{distance_to_segment, Rect, Vec2};
use crate::surface::Surface;

/// Maximum distance from the segment at which a point still hits a line.
///
/// Lines carry no stroke width; this is a fixed half-pixel tolerance.
pub const LINE_HIT_TOLERANCE: f64 = 0.5;

/// Line geometry: displacement from the shape origin to the second endpoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineShape {
    pub delta: Vec2,
}

impl LineShape {
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { delta: Vec2::new(dx, dy) }
    }

    pub(super) fn contains(&self, origin: Vec2, p: Vec2) -> bool {
        distance_to_segment(p, origin, origin + self.delta) <= LINE_HIT_TOLERANCE
    }

    pub(super) fn draw<S: Surface + ?Sized>(&self, origin: Vec2, surface: &mut S) {
        let end = origin + self.delta;
        surface.draw_line(origin.x, origin.y, end.x, end.y);
    }

    pub(super) fn bounds(&self, origin: Vec2) -> Rect {
        Rect::from_corners(origin, origin + self.delta)
    }
}
