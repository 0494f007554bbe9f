use crate::coords::{Rect, Vec2};

use super::Surface;

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    SetColor(String),
    Line { from: Vec2, to: Vec2 },
    FillRect(Rect),
    FillOval(Rect),
}

impl SurfaceCmd {
    /// Returns `true` for geometry calls (everything except `SetColor`).
    #[inline]
    pub fn is_primitive(&self) -> bool {
        !matches!(self, SurfaceCmd::SetColor(_))
    }
}

/// Surface that records every call in order instead of rasterizing.
///
/// Useful for headless callers that forward the stream to another backend,
/// and for asserting paint order in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    cmds: Vec<SurfaceCmd>,
}

impl RecordingSurface {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, cmds: Vec::new() }
    }

    /// Returns recorded calls in call order.
    #[inline]
    pub fn cmds(&self) -> &[SurfaceCmd] {
        &self.cmds
    }

    /// Clears recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Drains and returns the recorded calls.
    #[inline]
    pub fn take(&mut self) -> Vec<SurfaceCmd> {
        std::mem::take(&mut self.cmds)
    }
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: &str) {
        self.cmds.push(SurfaceCmd::SetColor(color.to_string()));
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.cmds.push(SurfaceCmd::Line { from: Vec2::new(x0, y0), to: Vec2::new(x1, y1) });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.cmds.push(SurfaceCmd::FillRect(Rect::new(x, y, width, height)));
    }

    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.cmds.push(SurfaceCmd::FillOval(Rect::new(x, y, width, height)));
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}
