//! Shape model.
//!
//! Extending the set:
//! - add a geometry module under `scene::shapes::*` with `contains`, `draw`, `bounds`
//! - add a variant to [`ShapeKind`] and a constructor on [`Shape`]
//! - the `match` arms below will refuse to compile until the variant is handled

pub(crate) mod line;
pub(crate) mod oval;
pub(crate) mod rect;
pub(crate) mod square;

pub use line::{LineShape, LINE_HIT_TOLERANCE};
pub use oval::OvalShape;
pub use rect::RectShape;
pub use square::SquareShape;

use crate::coords::{Rect, Vec2};
use crate::surface::Surface;

/// Color descriptor every shape starts with.
pub const DEFAULT_COLOR: &str = "BLACK";

/// Geometry of a shape, relative to its origin.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line(LineShape),
    Square(SquareShape),
    Rect(RectShape),
    Oval(OvalShape),
}

/// A positioned, colored figure.
///
/// `origin` is the upper-left corner for box shapes and the first endpoint
/// for lines. `color` is an opaque descriptor handed to the surface as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    origin: Vec2,
    color: String,
    kind: ShapeKind,
}

impl Shape {
    fn from_kind(x: f64, y: f64, kind: ShapeKind) -> Self {
        Self {
            origin: Vec2::new(x, y),
            color: DEFAULT_COLOR.to_string(),
            kind,
        }
    }

    /// Line from `(x1, y1)` to `(x2, y2)`.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_kind(x1, y1, ShapeKind::Line(LineShape::new(x2 - x1, y2 - y1)))
    }

    /// Square with upper-left corner `(x, y)`.
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Self::from_kind(x, y, ShapeKind::Square(SquareShape::new(size)))
    }

    /// Axis-aligned rectangle with upper-left corner `(x, y)`.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_kind(x, y, ShapeKind::Rect(RectShape::new(width, height)))
    }

    /// Ellipse inscribed in the given bounding box.
    pub fn oval(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_kind(x, y, ShapeKind::Oval(OvalShape::new(width, height)))
    }

    /// Builder form of [`set_color`](Self::set_color).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Moves the origin to `(x, y)`. Off-surface values are allowed.
    #[inline]
    pub fn set_location(&mut self, x: f64, y: f64) {
        self.origin = Vec2::new(x, y);
    }

    /// Translates the origin by `(dx, dy)`.
    #[inline]
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.origin += Vec2::new(dx, dy);
    }

    #[inline]
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Hit test. Total over all inputs; degenerate shapes and NaN never panic.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let p = Vec2::new(x, y);
        match &self.kind {
            ShapeKind::Line(s) => s.contains(self.origin, p),
            ShapeKind::Square(s) => s.contains(self.origin, p),
            ShapeKind::Rect(s) => s.contains(self.origin, p),
            ShapeKind::Oval(s) => s.contains(self.origin, p),
        }
    }

    /// Axis-aligned bounds. Lines are normalized so the extent is non-negative.
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ShapeKind::Line(s) => s.bounds(self.origin),
            ShapeKind::Square(s) => s.bounds(self.origin),
            ShapeKind::Rect(s) => s.bounds(self.origin),
            ShapeKind::Oval(s) => s.bounds(self.origin),
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Applies this shape's color, then issues one primitive call.
    ///
    /// Leaves the surface's current color set to this shape's color.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_color(&self.color);
        match &self.kind {
            ShapeKind::Line(s) => s.draw(self.origin, surface),
            ShapeKind::Square(s) => s.draw(self.origin, surface),
            ShapeKind::Rect(s) => s.draw(self.origin, surface),
            ShapeKind::Oval(s) => s.draw(self.origin, surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceCmd};

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn new_shapes_are_black() {
        for s in [
            Shape::line(0.0, 0.0, 1.0, 1.0),
            Shape::square(0.0, 0.0, 1.0),
            Shape::rect(0.0, 0.0, 1.0, 2.0),
            Shape::oval(0.0, 0.0, 1.0, 2.0),
        ] {
            assert_eq!(s.color(), DEFAULT_COLOR);
        }
    }

    #[test]
    fn set_color_is_stored_verbatim() {
        let mut s = Shape::square(0.0, 0.0, 1.0);
        s.set_color("not really a color");
        assert_eq!(s.color(), "not really a color");
        assert_eq!(s.with_color("#00ff00").color(), "#00ff00");
    }

    #[test]
    fn move_by_accumulates() {
        let mut s = Shape::rect(1.0, 2.0, 3.0, 4.0);
        s.move_by(10.0, -5.0);
        s.move_by(0.5, 0.5);
        assert_eq!(s.location(), Vec2::new(11.5, -2.5));
    }

    #[test]
    fn set_location_is_absolute() {
        let mut s = Shape::oval(1.0, 2.0, 3.0, 4.0);
        s.move_by(100.0, 100.0);
        s.set_location(-7.0, 9.0);
        assert_eq!(s.location(), Vec2::new(-7.0, 9.0));
    }

    #[test]
    fn moving_a_line_keeps_its_delta() {
        let mut s = Shape::line(0.0, 0.0, 10.0, 0.0);
        s.set_location(5.0, 5.0);
        assert!(s.contains(15.0, 5.0));
        assert!(!s.contains(10.0, 0.0));
    }

    // ── contains: boxes ───────────────────────────────────────────────────

    #[test]
    fn box_shapes_include_all_edges() {
        for s in [Shape::square(0.0, 0.0, 10.0), Shape::rect(0.0, 0.0, 10.0, 10.0)] {
            assert!(s.contains(0.0, 5.0));
            assert!(s.contains(10.0, 5.0));
            assert!(s.contains(5.0, 0.0));
            assert!(s.contains(5.0, 10.0));
            assert!(s.contains(0.0, 0.0));
            assert!(s.contains(10.0, 10.0));
        }
    }

    #[test]
    fn box_shapes_exclude_outside() {
        let eps = 1e-9;
        for s in [Shape::square(0.0, 0.0, 10.0), Shape::rect(0.0, 0.0, 10.0, 10.0)] {
            assert!(!s.contains(-eps, 5.0));
            assert!(!s.contains(10.0 + eps, 5.0));
            assert!(!s.contains(5.0, -eps));
            assert!(!s.contains(5.0, 10.0 + eps));
        }
    }

    #[test]
    fn rect_uses_width_and_height_independently() {
        let s = Shape::rect(300.0, 50.0, 100.0, 200.0);
        assert!(s.contains(310.0, 70.0));
        assert!(s.contains(400.0, 250.0));
        assert!(!s.contains(401.0, 70.0));
    }

    // ── contains: line ────────────────────────────────────────────────────

    #[test]
    fn line_hit_on_segment() {
        assert!(Shape::line(0.0, 0.0, 10.0, 0.0).contains(5.0, 0.0));
    }

    #[test]
    fn line_miss_beyond_tolerance() {
        assert!(!Shape::line(0.0, 0.0, 10.0, 0.0).contains(5.0, 1.0));
    }

    #[test]
    fn line_hit_within_tolerance() {
        assert!(Shape::line(0.0, 0.0, 10.0, 0.0).contains(5.0, 0.5));
    }

    #[test]
    fn line_clamps_to_endpoints() {
        let s = Shape::line(0.0, 0.0, 10.0, 0.0);
        assert!(!s.contains(-1.0, 0.0));
        assert!(!s.contains(11.0, 0.0));
        assert!(s.contains(10.4, 0.0));
    }

    #[test]
    fn diagonal_line() {
        let s = Shape::line(10.0, 10.0, 200.0, 200.0);
        assert!(s.contains(50.0, 50.0));
        assert!(!s.contains(50.0, 52.0));
    }

    #[test]
    fn zero_length_line_behaves_as_point() {
        let s = Shape::line(5.0, 5.0, 5.0, 5.0);
        assert!(s.contains(5.0, 5.0));
        assert!(s.contains(5.3, 5.0));
        assert!(!s.contains(6.0, 5.0));
    }

    #[test]
    fn huge_line_still_hits_near_segment() {
        let s = Shape::line(-1.0e200, 0.0, 1.0e200, 0.0);
        assert!(s.contains(0.0, 0.0));
        assert!(s.contains(0.0, 0.4));
        assert!(!s.contains(0.0, 2.0));
    }

    // ── contains: oval ────────────────────────────────────────────────────

    #[test]
    fn oval_center_and_boundary() {
        let s = Shape::oval(0.0, 0.0, 100.0, 100.0);
        assert!(s.contains(50.0, 50.0));
        assert!(s.contains(100.0, 50.0));
        assert!(s.contains(50.0, 0.0));
        assert!(!s.contains(101.0, 50.0));
    }

    #[test]
    fn oval_excludes_box_corners() {
        let s = Shape::oval(0.0, 0.0, 100.0, 100.0);
        assert!(!s.contains(1.0, 1.0));
        assert!(!s.contains(99.0, 99.0));
    }

    #[test]
    fn oval_respects_unequal_radii() {
        let s = Shape::oval(500.0, 50.0, 150.0, 100.0);
        assert!(s.contains(575.0, 100.0));
        assert!(s.contains(650.0, 100.0));
        assert!(!s.contains(575.0, 151.0));
        assert!(!s.contains(510.0, 70.0));
    }

    #[test]
    fn oval_centers_on_its_box_after_move() {
        let mut s = Shape::oval(0.0, 0.0, 40.0, 20.0);
        s.set_location(100.0, 200.0);
        assert!(s.contains(120.0, 210.0));
        assert!(s.contains(140.0, 210.0));
        assert!(!s.contains(20.0, 10.0));
    }

    // ── contains: degenerate ──────────────────────────────────────────────

    #[test]
    fn zero_area_shapes_contain_nothing() {
        assert!(!Shape::oval(0.0, 0.0, 0.0, 10.0).contains(0.0, 5.0));
        assert!(!Shape::oval(0.0, 0.0, 0.0, 0.0).contains(0.0, 0.0));
        assert!(!Shape::rect(0.0, 0.0, 10.0, 0.0).contains(5.0, 0.0));
        assert!(!Shape::square(0.0, 0.0, 0.0).contains(0.0, 0.0));
    }

    #[test]
    fn nan_query_is_a_miss() {
        assert!(!Shape::line(0.0, 0.0, 10.0, 0.0).contains(f64::NAN, 0.0));
        assert!(!Shape::oval(0.0, 0.0, 10.0, 10.0).contains(5.0, f64::NAN));
        assert!(!Shape::rect(0.0, 0.0, 10.0, 10.0).contains(f64::NAN, f64::NAN));
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn line_bounds_are_normalized() {
        let s = Shape::line(10.0, 0.0, 0.0, 5.0);
        assert_eq!(s.bounds(), Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn box_bounds_follow_location() {
        let mut s = Shape::square(0.0, 0.0, 4.0);
        s.move_by(1.0, 2.0);
        assert_eq!(s.bounds(), Rect::new(1.0, 2.0, 4.0, 4.0));
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_sets_color_then_one_primitive() {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        Shape::line(1.0, 2.0, 3.0, 4.0).draw(&mut surface);
        Shape::square(5.0, 6.0, 7.0).with_color("RED").draw(&mut surface);
        Shape::rect(1.0, 1.0, 2.0, 3.0).with_color("BLUE").draw(&mut surface);
        Shape::oval(0.0, 0.0, 8.0, 9.0).with_color("GRAY").draw(&mut surface);

        assert_eq!(
            surface.cmds(),
            &[
                SurfaceCmd::SetColor("BLACK".into()),
                SurfaceCmd::Line { from: Vec2::new(1.0, 2.0), to: Vec2::new(3.0, 4.0) },
                SurfaceCmd::SetColor("RED".into()),
                SurfaceCmd::FillRect(Rect::new(5.0, 6.0, 7.0, 7.0)),
                SurfaceCmd::SetColor("BLUE".into()),
                SurfaceCmd::FillRect(Rect::new(1.0, 1.0, 2.0, 3.0)),
                SurfaceCmd::SetColor("GRAY".into()),
                SurfaceCmd::FillOval(Rect::new(0.0, 0.0, 8.0, 9.0)),
            ]
        );
    }

    #[test]
    fn draw_accepts_trait_objects() {
        let mut recording = RecordingSurface::new(10.0, 10.0);
        let surface: &mut dyn Surface = &mut recording;
        Shape::square(0.0, 0.0, 1.0).draw(surface);
        assert_eq!(recording.cmds().len(), 2);
    }
}
