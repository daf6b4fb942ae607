use vecdraw_core::{Color, Point};

use super::{DesignerShape, ShapeBox, ShapeType};
use crate::renderer::{Pen, RenderSurface};

/// Ellipse inscribed in its bounding box.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesignEllipse {
    pub rect: ShapeBox,
    pub color: Color,
}

impl DesignEllipse {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: ShapeBox::new(x, y, width, height),
            color: Color::default(),
        }
    }

    pub fn from_corners(first: Point, second: Point) -> Self {
        Self {
            rect: ShapeBox::from_corners(first, second),
            color: Color::default(),
        }
    }

    /// Exact center and semi-axes `(cx, cy, a, b)`. Semi-axes keep the sign of the box extents.
    pub fn axes(&self) -> (f64, f64, f64, f64) {
        let a = f64::from(self.rect.width) / 2.0;
        let b = f64::from(self.rect.height) / 2.0;
        (f64::from(self.rect.x) + a, f64::from(self.rect.y) + b, a, b)
    }
}

impl DesignerShape for DesignEllipse {
    fn render(&self, surface: &mut dyn RenderSurface, pen: Pen) {
        surface.stroke_ellipse(self.rect, pen);
    }

    fn serialize(&self) -> String {
        self.rect.record(ShapeType::Ellipse.tag())
    }

    fn bounds(&self) -> (i32, i32, i32, i32) {
        self.rect.bounds()
    }

    fn corners(&self) -> (Point, Point) {
        self.rect.corners()
    }

    fn center(&self) -> Point {
        self.rect.center()
    }

    fn translate(&mut self, new_center: Point) {
        self.rect.translate(new_center);
    }

    fn contains_point(&self, p: Point, _tolerance: f64) -> bool {
        let (cx, cy, a, b) = self.axes();
        let dx = f64::from(p.x) - cx;
        let dy = f64::from(p.y) - cy;

        // A flat box collapses the ellipse onto a segment (or a single point).
        if a == 0.0 || b == 0.0 {
            return dx.abs() <= a.abs() && dy.abs() <= b.abs();
        }

        (dx / a).powi(2) + (dy / b).powi(2) <= 1.0
    }
}
