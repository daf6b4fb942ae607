use std::fmt;

use vecdraw_core::{Color, Point};

use crate::renderer::{Pen, RenderSurface};

mod ellipse;
mod line;
mod rectangle;

pub use ellipse::DesignEllipse;
pub use line::DesignLine;
pub use rectangle::DesignRectangle;

/// Pick distance used by [`DesignerShape::hit_test`].
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Narrows a widened coordinate to `i32`, saturating at the range ends.
pub(crate) fn clamp_coord(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Limits a shift so that both `a + delta` and `b + delta` stay inside `i32`.
pub(crate) fn shift_within(delta: i64, a: i32, b: i32) -> i64 {
    let low = i64::from(i32::MIN) - i64::from(a.min(b));
    let high = i64::from(i32::MAX) - i64::from(a.max(b));
    delta.clamp(low, high)
}

/// Capability set shared by every drawable shape.
pub trait DesignerShape {
    /// Strokes the outline onto `surface`. Never mutates the shape.
    fn render(&self, surface: &mut dyn RenderSurface, pen: Pen);

    /// Comma-separated record: tag followed by four integers.
    fn serialize(&self) -> String;

    /// Normalized `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> (i32, i32, i32, i32);

    /// The two points the shape was defined from.
    fn corners(&self) -> (Point, Point);

    /// Centroid, rounded toward the first corner by integer division.
    fn center(&self) -> Point;

    /// Moves every defining point by the same delta so that `center()` becomes `new_center`.
    /// The delta is cut short where a point would leave the `i32` range.
    fn translate(&mut self, new_center: Point);

    /// `tolerance` is the pick distance for outline-only shapes; closed shapes
    /// test their interior exactly.
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;

    fn hit_test(&self, p: Point) -> bool {
        self.contains_point(p, LINE_HIT_TOLERANCE)
    }
}

/// Axis-aligned box stored as a corner plus signed extents.
///
/// Width and height are `x2 - x1` and `y2 - y1` of the construction corners,
/// so they are negative when the gesture ended left of or above its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShapeBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ShapeBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extents saturate at the `i32` range when the corners are further apart.
    pub fn from_corners(first: Point, second: Point) -> Self {
        let (dx, dy) = first.delta_to(&second);
        Self::new(first.x, first.y, clamp_coord(dx), clamp_coord(dy))
    }

    pub fn corners(&self) -> (Point, Point) {
        (
            Point::new(self.x, self.y),
            Point::new(
                clamp_coord(i64::from(self.x) + i64::from(self.width)),
                clamp_coord(i64::from(self.y) + i64::from(self.height)),
            ),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            clamp_coord(i64::from(self.x) + i64::from(self.width) / 2),
            clamp_coord(i64::from(self.y) + i64::from(self.height) / 2),
        )
    }

    pub fn translate(&mut self, new_center: Point) {
        let (dx, dy) = self.center().delta_to(&new_center);
        let (first, second) = self.corners();
        self.x = clamp_coord(i64::from(self.x) + shift_within(dx, first.x, second.x));
        self.y = clamp_coord(i64::from(self.y) + shift_within(dy, first.y, second.y));
    }

    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let (a, b) = self.corners();
        (a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        (min_x..=max_x).contains(&p.x) && (min_y..=max_y).contains(&p.y)
    }

    fn record(&self, tag: &str) -> String {
        format!("{},{},{},{},{}", tag, self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum ShapeType {
    #[default]
    Line,
    Rectangle,
    Ellipse,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [ShapeType::Line, ShapeType::Rectangle, ShapeType::Ellipse];

    /// Record tag used in drawing files.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeType::Line => "Linea",
            ShapeType::Rectangle => "Rectangulo",
            ShapeType::Ellipse => "Elipse",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Line => write!(f, "Line"),
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Ellipse => write!(f, "Ellipse"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    Line(DesignLine),
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
}

impl DesignerShape for Shape {
    fn render(&self, surface: &mut dyn RenderSurface, pen: Pen) {
        match self {
            Shape::Line(s) => s.render(surface, pen),
            Shape::Rectangle(s) => s.render(surface, pen),
            Shape::Ellipse(s) => s.render(surface, pen),
        }
    }

    fn serialize(&self) -> String {
        match self {
            Shape::Line(s) => s.serialize(),
            Shape::Rectangle(s) => s.serialize(),
            Shape::Ellipse(s) => s.serialize(),
        }
    }

    fn bounds(&self) -> (i32, i32, i32, i32) {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
        }
    }

    fn corners(&self) -> (Point, Point) {
        match self {
            Shape::Line(s) => s.corners(),
            Shape::Rectangle(s) => s.corners(),
            Shape::Ellipse(s) => s.corners(),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Line(s) => s.center(),
            Shape::Rectangle(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
        }
    }

    fn translate(&mut self, new_center: Point) {
        match self {
            Shape::Line(s) => s.translate(new_center),
            Shape::Rectangle(s) => s.translate(new_center),
            Shape::Ellipse(s) => s.translate(new_center),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.contains_point(p, tolerance),
            Shape::Rectangle(s) => s.contains_point(p, tolerance),
            Shape::Ellipse(s) => s.contains_point(p, tolerance),
        }
    }
}

impl Shape {
    /// Builds a shape of the given kind from the two points of a drag gesture.
    pub fn from_corners(kind: ShapeType, first: Point, second: Point) -> Self {
        match kind {
            ShapeType::Line => Shape::Line(DesignLine::new(first, second)),
            ShapeType::Rectangle => {
                Shape::Rectangle(DesignRectangle::from_corners(first, second))
            }
            ShapeType::Ellipse => Shape::Ellipse(DesignEllipse::from_corners(first, second)),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Line(s) => s.color,
            Shape::Rectangle(s) => s.color,
            Shape::Ellipse(s) => s.color,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Shape::Line(s) => s.color = color,
            Shape::Rectangle(s) => s.color = color,
            Shape::Ellipse(s) => s.color = color,
        }
    }
}

impl From<DesignLine> for Shape {
    fn from(line: DesignLine) -> Self {
        Shape::Line(line)
    }
}

impl From<DesignRectangle> for Shape {
    fn from(rect: DesignRectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<DesignEllipse> for Shape {
    fn from(ellipse: DesignEllipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}
