use vecdraw_core::{Color, Point};

use super::{DesignerShape, ShapeBox, ShapeType};
use crate::renderer::{Pen, RenderSurface};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesignRectangle {
    pub rect: ShapeBox,
    pub color: Color,
}

impl DesignRectangle {
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
}

impl DesignerShape for DesignRectangle {
    fn render(&self, surface: &mut dyn RenderSurface, pen: Pen) {
        surface.stroke_rectangle(self.rect, pen);
    }

    fn serialize(&self) -> String {
        self.rect.record(ShapeType::Rectangle.tag())
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
        self.rect.contains(p)
    }
}
