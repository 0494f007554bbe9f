use super::Vec2;

/// Euclidean distance from `p` to the closed segment `a`–`b`.
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// degenerates to the distance from `p` to `a`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let proj = a + ab * projection(p - a, ab);
    (proj - p).length()
}

/// Clamped parameter of the projection of `ap` onto `ab`.
///
/// `|ab|²` overflows for deltas near `1e154`; those are rescaled by their
/// largest component before projecting.
fn projection(ap: Vec2, ab: Vec2) -> f64 {
    let norm = ab.length_squared();
    if norm > 0.0 && norm.is_finite() {
        return (ap.dot(ab) / norm).clamp(0.0, 1.0);
    }

    let scale = ab.x.abs().max(ab.y.abs());
    if !(scale > 0.0 && scale.is_finite()) {
        return 0.0;
    }
    let inv = 1.0 / scale;
    let ab = ab * inv;
    ((ap * inv).dot(ab) / ab.length_squared()).clamp(0.0, 1.0)
}
