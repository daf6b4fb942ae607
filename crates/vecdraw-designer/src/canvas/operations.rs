//! Hit-testing, selection, moving and rendering on the canvas.

use super::{Canvas, HitOrder};
use crate::model::{DesignerShape, Shape};
use crate::renderer::{Pen, RenderSurface};
use vecdraw_core::{Color, Point, Result};

impl Canvas {
    /// Index of the first shape containing `point`, scanning in `order`.
    pub fn find_hit(&self, point: Point, order: HitOrder) -> Option<usize> {
        let tolerance = self.line_tolerance();
        let hit = |(_, shape): &(usize, &Shape)| shape.contains_point(point, tolerance);
        let mut indexed = self.shapes().iter().enumerate();
        let found = match order {
            HitOrder::FrontToBack => indexed.find(hit),
            HitOrder::BackToFront => indexed.rev().find(hit),
        };
        found.map(|(index, _)| index)
    }

    /// Marks the shape at `index` as the only selected shape.
    pub fn set_selected(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.selection_manager.select(index);
        tracing::debug!("Selected shape {}", index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection_manager.deselect();
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection_manager.selected_index()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_index().and_then(|index| self.get(index))
    }

    /// Selects the earliest-created shape under `point`.
    ///
    /// A click that hits nothing leaves the current selection as it is.
    pub fn select_at(&mut self, point: Point) -> Option<usize> {
        let index = self.find_hit(point, HitOrder::FrontToBack)?;
        self.selection_manager.select(index);
        tracing::debug!("Selected shape {}", index);
        Some(index)
    }

    /// Removes the topmost shape under `point`.
    pub fn erase_at(&mut self, point: Point) -> Option<Shape> {
        let index = self.find_hit(point, HitOrder::BackToFront)?;
        self.remove_at(index).ok()
    }

    /// Color the shape at `index` is drawn with: the highlight when selected.
    pub fn display_color(&self, index: usize) -> Option<Color> {
        let shape = self.get(index)?;
        if self.selection_manager.is_selected(index) {
            Some(self.highlight_color())
        } else {
            Some(shape.color())
        }
    }

    /// Moves the selected shape so its center lands on `new_center`.
    ///
    /// Returns `false` when nothing is selected.
    pub fn translate_selected(&mut self, new_center: Point) -> bool {
        match self.selected_index() {
            Some(index) => self.translate_at(index, new_center).is_ok(),
            None => false,
        }
    }

    /// Moves the shape at `index` so its center lands on `new_center`.
    pub fn translate_at(&mut self, index: usize, new_center: Point) -> Result<()> {
        self.check_index(index)?;
        if let Some(shape) = self.shape_mut(index) {
            shape.translate(new_center);
        }
        Ok(())
    }

    /// Draws every shape in insertion order.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        for (index, shape) in self.shapes().iter().enumerate() {
            let color = self.display_color(index).unwrap_or_else(|| shape.color());
            shape.render(surface, Pen::new(color).with_width(self.stroke_width()));
        }
    }
}
