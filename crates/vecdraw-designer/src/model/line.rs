use vecdraw_core::{Color, Point};

use super::{clamp_coord, shift_within, DesignerShape, ShapeType};
use crate::renderer::{Pen, RenderSurface};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            color: Color::default(),
        }
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Point) -> f64 {
        let (sx, sy) = (f64::from(self.start.x), f64::from(self.start.y));
        let (ex, ey) = (f64::from(self.end.x), f64::from(self.end.y));
        let (px, py) = (f64::from(p.x), f64::from(p.y));

        let l2 = (ex - sx).powi(2) + (ey - sy).powi(2);
        if l2 == 0.0 {
            return p.distance_to(&self.start);
        }
        let t = (((px - sx) * (ex - sx) + (py - sy) * (ey - sy)) / l2).clamp(0.0, 1.0);
        let proj_x = sx + t * (ex - sx);
        let proj_y = sy + t * (ey - sy);
        ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
    }
}

impl DesignerShape for DesignLine {
    fn render(&self, surface: &mut dyn RenderSurface, pen: Pen) {
        surface.stroke_line(self.start, self.end, pen);
    }

    fn serialize(&self) -> String {
        format!(
            "{},{},{},{},{}",
            ShapeType::Line.tag(),
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y
        )
    }

    fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    fn corners(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    fn center(&self) -> Point {
        let (dx, dy) = self.start.delta_to(&self.end);
        Point::new(
            clamp_coord(i64::from(self.start.x) + dx / 2),
            clamp_coord(i64::from(self.start.y) + dy / 2),
        )
    }

    fn translate(&mut self, new_center: Point) {
        let (dx, dy) = self.center().delta_to(&new_center);
        let dx = shift_within(dx, self.start.x, self.end.x);
        let dy = shift_within(dy, self.start.y, self.end.y);
        for point in [&mut self.start, &mut self.end] {
            point.x = clamp_coord(i64::from(point.x) + dx);
            point.y = clamp_coord(i64::from(point.y) + dy);
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.distance_to(p) < tolerance
    }
}
