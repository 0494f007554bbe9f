use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use strata_engine::logging::{init_logging, LoggingConfig};
use strata_engine::surface::{Canvas, CanvasConfig};
use strata_engine::{Shape, ShapeId, ShapeKind, ShapeList, Surface};

/// Studio configuration, built with chained setters.
#[derive(Debug, Clone)]
struct StudioConfig {
    canvas: CanvasConfig,
    output: PathBuf,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            output: PathBuf::from("scene.png"),
        }
    }
}

impl StudioConfig {
    fn size(mut self, width: u32, height: u32) -> Self {
        self.canvas.width = width;
        self.canvas.height = height;
        self
    }

    fn background(mut self, color: impl Into<String>) -> Self {
        self.canvas.background = color.into();
        self
    }

    fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = demo_config();
    if let Some(path) = std::env::args_os().nth(1).filter(|p| !p.is_empty()) {
        config = config.output(path);
    }

    run(&config)
}

/// Wide canvas on an off-white background, written to `scene.png` unless overridden.
fn demo_config() -> StudioConfig {
    StudioConfig::default().size(800, 500).background("#f5f5f0")
}

fn run(config: &StudioConfig) -> Result<()> {
    let mut canvas = Canvas::new(&config.canvas).context("invalid canvas background")?;
    let (width, height) = (canvas.width(), canvas.height());

    let (mut scene, rect, oval) = diamond_scene(width, height);
    log::info!("scene: {} shapes on a {width}x{height} canvas", scene.len());

    let center = (width / 2.0, height / 2.0);
    pick(&scene, center);

    scene.move_to_front(rect)?;
    pick(&scene, center);

    scene.move_backward(rect)?;
    pick(&scene, center);

    // Box corner: inside the rectangle, outside the oval.
    pick(&scene, (width / 4.0 + 1.0, height / 4.0 + 1.0));
    pick(&scene, (1.0, 1.0));

    if let Some(shape) = scene.get_mut(oval) {
        shape.set_color("LIGHT_GRAY");
    }

    scene.draw(&mut canvas);
    save_png(&canvas, &config.output)?;
    log::info!("wrote {}", config.output.display());

    Ok(())
}

/// Diamond outline plus a blue rectangle and a gray oval sharing one box.
///
/// Returns the scene with the rectangle and oval handles.
fn diamond_scene(width: f64, height: f64) -> (ShapeList, ShapeId, ShapeId) {
    let mut scene = ShapeList::new();

    scene.push(Shape::line(0.0, height / 2.0, width / 2.0, 0.0));
    scene.push(Shape::line(width / 2.0, 0.0, width, height / 2.0));
    scene.push(Shape::line(width, height / 2.0, width / 2.0, height));
    scene.push(Shape::line(width / 2.0, height, 0.0, height / 2.0));

    let (x, y, w, h) = (width / 4.0, height / 4.0, width / 2.0, height / 2.0);
    let rect = scene.push(Shape::rect(x, y, w, h).with_color("BLUE"));
    let oval = scene.push(Shape::oval(x, y, w, h).with_color("GRAY"));

    (scene, rect, oval)
}

fn pick(scene: &ShapeList, (x, y): (f64, f64)) {
    match scene.shape_at(x, y).and_then(|id| scene.get(id).map(|s| (id, s))) {
        Some((id, shape)) => {
            log::info!("pick ({x}, {y}) -> {id} {} {}", kind_name(shape), shape.color())
        }
        None => log::info!("pick ({x}, {y}) -> nothing"),
    }
}

fn kind_name(shape: &Shape) -> &'static str {
    match shape.kind() {
        ShapeKind::Line(_) => "line",
        ShapeKind::Square(_) => "square",
        ShapeKind::Rect(_) => "rect",
        ShapeKind::Oval(_) => "oval",
    }
}

fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let (w, h) = canvas.size();
    let img = image::RgbaImage::from_raw(w, h, canvas.as_bytes().to_vec())
        .context("canvas buffer does not match its dimensions")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
