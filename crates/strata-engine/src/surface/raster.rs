use crate::coords::{Rect, Vec2};
use crate::paint::{Color, ColorParseError};

use super::Surface;

/// Raster canvas configuration.
///
/// `background` is a color descriptor resolved with [`Color::parse`].
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            background: "WHITE".to_string(),
        }
    }
}

/// Software RGBA framebuffer implementing [`Surface`].
///
/// Coverage rules:
/// - fills cover pixels whose centers lie inside the shape (`[min, max)`)
/// - lines are 1px Bresenham strokes between the pixels containing the endpoints
/// - everything is clipped to the canvas
///
/// Unrecognised color descriptors are logged and the current color is kept.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    background: Color,
    color: Color,
}

impl Canvas {
    pub fn new(config: &CanvasConfig) -> Result<Self, ColorParseError> {
        let background = Color::parse(&config.background)?;
        Ok(Self::with_background(config.width, config.height, background))
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![background.to_rgba(); len],
            background,
            color: Color::black(),
        }
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        let bg = self.background.to_rgba();
        self.pixels.fill(bg);
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color applied by the next primitive call.
    #[inline]
    pub fn current_color(&self) -> Color {
        self.color
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, _] = self.pixels[self.index(x, y)];
        Some(Color::new(r, g, b))
    }

    /// Row-major RGBA8 bytes, `width * height * 4` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn put(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.index(x as u32, y as u32);
        self.pixels[i] = self.color.to_rgba();
    }

    fn fill_span(&mut self, y: u32, x0: u32, x1: u32) {
        let row = self.index(0, y);
        let px = self.color.to_rgba();
        self.pixels[row + x0 as usize..row + x1 as usize].fill(px);
    }
}

impl Surface for Canvas {
    fn set_color(&mut self, color: &str) {
        match Color::parse(color) {
            Ok(c) => self.color = c,
            Err(e) => log::warn!("Canvas: {e}; keeping {}", self.color),
        }
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        // One pixel of slack so strokes ending just off-canvas still reach the edge.
        let min = Vec2::new(-1.0, -1.0);
        let max = Vec2::new(self.width as f64 + 1.0, self.height as f64 + 1.0);
        let Some((a, b)) = clip_segment(Vec2::new(x0, y0), Vec2::new(x1, y1), min, max) else {
            return;
        };

        let (mut x, mut y) = (a.x.floor() as i64, a.y.floor() as i64);
        let (tx, ty) = (b.x.floor() as i64, b.y.floor() as i64);

        let dx = (tx - x).abs();
        let dy = -(ty - y).abs();
        let sx = if x < tx { 1 } else { -1 };
        let sy = if y < ty { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y);
            if x == tx && y == ty {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            covered_span(x, width, self.width),
            covered_span(y, height, self.height),
        ) else {
            return;
        };
        for row in y0..y1 {
            self.fill_span(row, x0, x1);
        }
    }

    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let a = width / 2.0;
        let b = height / 2.0;
        if !(a > 0.0 && b > 0.0) {
            return;
        }
        let Vec2 { x: cx, y: cy } = Rect::new(x, y, width, height).center();

        let Some((y0, y1)) = covered_span(y, height, self.height) else {
            return;
        };
        for row in y0..y1 {
            let t = (row as f64 + 0.5 - cy) / b;
            let rem = 1.0 - t * t;
            if rem < 0.0 {
                continue;
            }
            let half = a * rem.sqrt();
            if let Some((x0, x1)) = covered_span(cx - half, 2.0 * half, self.width) {
                self.fill_span(row, x0, x1);
            }
        }
    }

    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }
}

/// Pixel indices in `[0, limit)` whose centers fall in `[start, start + len)`.
fn covered_span(start: f64, len: f64, limit: u32) -> Option<(u32, u32)> {
    if !(len > 0.0) {
        return None;
    }
    let lo = (start - 0.5).ceil().clamp(0.0, limit as f64);
    let hi = (start + len - 0.5).ceil().clamp(0.0, limit as f64);
    // NaN fails this comparison as well.
    if !(lo < hi) {
        return None;
    }
    Some((lo as u32, hi as u32))
}

/// Liang–Barsky clip of segment `a`–`b` against the box `[min, max]`.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((a + d * t0, a + d * t1))
}
