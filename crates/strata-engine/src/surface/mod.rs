//! Drawing surfaces.
//!
//! Responsibilities:
//! - define the narrow contract shapes draw through ([`Surface`])
//! - provide a recording surface for headless callers and tests
//! - provide a software raster surface that resolves color descriptors
//!
//! Windowing backends implement [`Surface`] outside this crate.

mod raster;
mod recording;

pub use raster::{Canvas, CanvasConfig};
pub use recording::{RecordingSurface, SurfaceCmd};

/// Primitive drawing contract consumed by shapes.
///
/// Coordinates are in surface units with a top-left origin. Implementations
/// clip to their own bounds; callers may pass any coordinates.
///
/// `set_color` receives the shape's descriptor verbatim. Validating or
/// resolving it is the surface's responsibility.
pub trait Surface {
    /// Sets the color used by subsequent primitive calls.
    fn set_color(&mut self, color: &str);

    /// Strokes a line from `(x0, y0)` to `(x1, y1)`.
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);

    /// Fills the axis-aligned rectangle with top-left `(x, y)`.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fills the ellipse inscribed in the given bounding box.
    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn width(&self) -> f64;

    fn height(&self) -> f64;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn set_color(&mut self, color: &str) {
        (**self).set_color(color);
    }

    #[inline]
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        (**self).draw_line(x0, y0, x1, y1);
    }

    #[inline]
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).fill_rect(x, y, width, height);
    }

    #[inline]
    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).fill_oval(x, y, width, height);
    }

    #[inline]
    fn width(&self) -> f64 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> f64 {
        (**self).height()
    }
}
