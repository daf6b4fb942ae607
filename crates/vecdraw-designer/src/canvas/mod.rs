//! Canvas holding the ordered shape collection.

mod operations;
mod types;

pub use types::HitOrder;

use crate::model::{DesignerShape, Shape, ShapeType, LINE_HIT_TOLERANCE};
use crate::renderer::STROKE_WIDTH;
use crate::selection_manager::SelectionManager;
use vecdraw_core::{Color, Error, Point, Result};
use vecdraw_settings::DrawingSettings;

/// Ordered shape collection. Insertion order is draw order: later shapes are
/// drawn on top.
#[derive(Debug, Clone)]
pub struct Canvas {
    shapes: Vec<Shape>,
    pub selection_manager: SelectionManager,
    default_color: Color,
    highlight_color: Color,
    stroke_width: f32,
    line_tolerance: f64,
}

impl Canvas {
    /// Creates an empty canvas with the stock drawing settings.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            selection_manager: SelectionManager::new(),
            default_color: Color::WHITE,
            highlight_color: Color::YELLOW,
            stroke_width: STROKE_WIDTH,
            line_tolerance: LINE_HIT_TOLERANCE,
        }
    }

    /// Creates an empty canvas using configured colors, stroke width and pick distance.
    pub fn with_settings(settings: &DrawingSettings) -> Self {
        Self {
            default_color: settings.default_color,
            highlight_color: settings.highlight_color,
            stroke_width: settings.stroke_width,
            line_tolerance: settings.line_hit_tolerance,
            ..Self::new()
        }
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn line_tolerance(&self) -> f64 {
        self.line_tolerance
    }

    /// Returns the number of shapes on the canvas.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub(crate) fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Appends a shape on top of the others and returns its index.
    pub fn add(&mut self, shape: Shape) -> usize {
        tracing::debug!("Adding {} at index {}", shape.shape_type(), self.shapes.len());
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Adds a shape of `kind` spanning the two gesture points, in the default color.
    pub fn add_from_corners(&mut self, kind: ShapeType, first: Point, second: Point) -> usize {
        let mut shape = Shape::from_corners(kind, first, second);
        shape.set_color(self.default_color);
        self.add(shape)
    }

    /// Adds a line to the canvas.
    pub fn add_line(&mut self, start: Point, end: Point) -> usize {
        self.add_from_corners(ShapeType::Line, start, end)
    }

    /// Adds a rectangle to the canvas.
    pub fn add_rectangle(&mut self, first: Point, second: Point) -> usize {
        self.add_from_corners(ShapeType::Rectangle, first, second)
    }

    /// Adds an ellipse to the canvas.
    pub fn add_ellipse(&mut self, first: Point, second: Point) -> usize {
        self.add_from_corners(ShapeType::Ellipse, first, second)
    }

    /// Removes the shape at `index`.
    ///
    /// A selection of the removed shape is dropped; a selection above it is
    /// shifted so it keeps naming the same shape.
    pub fn remove_at(&mut self, index: usize) -> Result<Shape> {
        self.check_index(index)?;
        let shape = self.shapes.remove(index);
        if self.selection_manager.shape_removed(index) {
            tracing::debug!("Removed shape {} was selected", index);
        }
        tracing::debug!("Removed {} at index {}", shape.shape_type(), index);
        Ok(shape)
    }

    /// Empties the canvas and clears the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selection_manager.deselect();
    }

    /// Replaces every shape at once, e.g. after loading a file. Clears the selection.
    pub fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.selection_manager.deselect();
    }

    /// Union of all shape bounds as `(min_x, min_y, max_x, max_y)`, `None` when empty.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        self.shapes
            .iter()
            .map(|shape| shape.bounds())
            .reduce(|(ax1, ay1, ax2, ay2), (bx1, by1, bx2, by2)| {
                (ax1.min(bx1), ay1.min(by1), ax2.max(bx2), ay2.max(by2))
            })
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.shapes.len() {
            Ok(())
        } else {
            tracing::error!(
                "Shape index {} out of range for {} shapes",
                index,
                self.shapes.len()
            );
            Err(Error::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            })
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
