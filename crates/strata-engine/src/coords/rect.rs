use super::Vec2;

/// Axis-aligned rectangle in surface units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rectangle containing both corner points.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Rect::from_origin_size(a, b - a).normalized()
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x / 2.0, self.origin.y + self.size.y / 2.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Closed containment: `[min, max]` on both axes.
    ///
    /// Empty rectangles (zero or negative extent) contain nothing.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        if self.is_empty() {
            return false;
        }
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    #[test]
    fn from_corners_orders_points() {
        let rect = Rect::from_corners(Vec2::new(10.0, 0.0), Vec2::new(0.0, 5.0));
        assert_eq!(rect, r(0.0, 0.0, 10.0, 5.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_all_edges_inclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 5.0)));
        assert!(rect.contains(Vec2::new(10.0, 5.0)));
        assert!(rect.contains(Vec2::new(5.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 10.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains(Vec2::new(-0.001, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.001)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!r(0.0, 0.0, 0.0, 10.0).contains(Vec2::new(0.0, 5.0)));
        assert!(!r(0.0, 0.0, -5.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn nan_is_never_contained() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(f64::NAN, 5.0)));
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_is_midpoint_of_box() {
        assert_eq!(r(100.0, 50.0, 200.0, 100.0).center(), Vec2::new(200.0, 100.0));
        assert_eq!(r(-4.0, 2.0, 3.0, 1.0).center(), Vec2::new(-2.5, 2.5));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
