//! Render surfaces for designer shapes
//!
//! Shapes never draw themselves onto a concrete backend; they stroke their
//! outline through [`RenderSurface`]. [`PixmapSurface`] implements it on top of
//! tiny-skia so a drawing can be rasterized without any GUI toolkit.
//!
//! Features:
//! - Anti-aliased rendering
//! - Negative box extents normalized by the surface
//! - Degenerate boxes drawn as a single stroke

use crate::canvas::Canvas;
use crate::model::ShapeBox;
use image::{Rgb, RgbImage};
use std::path::Path;
use tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use vecdraw_core::{Color, Point};
use vecdraw_settings::Config;

/// Outline width used when nothing else is configured.
pub const STROKE_WIDTH: f32 = 2.0;

/// Color and width of an outline stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: STROKE_WIDTH,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// Stroke primitives a front-end must provide to draw shapes.
pub trait RenderSurface {
    fn stroke_line(&mut self, from: Point, to: Point, pen: Pen);
    fn stroke_rectangle(&mut self, rect: ShapeBox, pen: Pen);
    fn stroke_ellipse(&mut self, rect: ShapeBox, pen: Pen);
}

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255)
}

/// Raster surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Returns `None` when either dimension is zero.
    pub fn new(width: u32, height: u32, background: Color) -> Option<Self> {
        let mut pixmap = Pixmap::new(width, height)?;
        pixmap.fill(to_skia(background));
        Some(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color of a single pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgb(c.red(), c.green(), c.blue()))
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path, pen: Pen) {
        let mut paint = Paint::default();
        paint.set_color(to_skia(pen.color));
        paint.anti_alias = true;
        let stroke = Stroke {
            width: pen.width,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Normalized box as a tiny-skia rect; `None` when flat in either direction.
    fn skia_rect(rect: ShapeBox) -> Option<Rect> {
        let (min_x, min_y, max_x, max_y) = rect.bounds();
        Rect::from_ltrb(min_x as f32, min_y as f32, max_x as f32, max_y as f32)
    }

    /// A box with zero width or height is drawn as the segment it collapses to.
    fn stroke_flat_box(&mut self, rect: ShapeBox, pen: Pen) {
        let (min_x, min_y, max_x, max_y) = rect.bounds();
        self.stroke_line(Point::new(min_x, min_y), Point::new(max_x, max_y), pen);
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            // Background is opaque, so premultiplied channels equal straight ones.
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        use anyhow::Context;

        let path = path.as_ref();
        self.to_rgb_image()
            .save(path)
            .with_context(|| format!("Failed to write image {}", path.display()))?;
        tracing::info!("Rendered {}x{} image to {}", self.width(), self.height(), path.display());
        Ok(())
    }
}

impl RenderSurface for PixmapSurface {
    fn stroke_line(&mut self, from: Point, to: Point, pen: Pen) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        if from == to {
            // tiny-skia drops zero-length segments; nudge so a dot is drawn.
            pb.line_to(to.x as f32 + 0.01, to.y as f32);
        } else {
            pb.line_to(to.x as f32, to.y as f32);
        }
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, pen);
        }
    }

    fn stroke_rectangle(&mut self, rect: ShapeBox, pen: Pen) {
        match Self::skia_rect(rect) {
            Some(r) if r.width() > 0.0 && r.height() > 0.0 => {
                let path = PathBuilder::from_rect(r);
                self.stroke_path(&path, pen);
            }
            _ => self.stroke_flat_box(rect, pen),
        }
    }

    fn stroke_ellipse(&mut self, rect: ShapeBox, pen: Pen) {
        let oval = Self::skia_rect(rect)
            .filter(|r| r.width() > 0.0 && r.height() > 0.0)
            .and_then(PathBuilder::from_oval);
        match oval {
            Some(path) => self.stroke_path(&path, pen),
            None => self.stroke_flat_box(rect, pen),
        }
    }
}

/// Render canvas shapes to an image buffer
pub fn render_canvas(canvas: &Canvas, config: &Config) -> RgbImage {
    let (width, height) = (config.canvas.width, config.canvas.height);
    let Some(mut surface) = PixmapSurface::new(width, height, config.canvas.background_color)
    else {
        return RgbImage::new(width, height);
    };
    canvas.render(&mut surface);
    surface.to_rgb_image()
}
