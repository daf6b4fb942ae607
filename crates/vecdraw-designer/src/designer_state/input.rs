//! Pointer handling for the designer state.

use super::{DesignerState, DrawingMode, PointerButton};
use vecdraw_core::Point;

impl DesignerState {
    /// Handles a button press at `point`. Only the primary button acts.
    pub fn pointer_pressed(&mut self, point: Point, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }

        match self.mode {
            DrawingMode::None => {}
            DrawingMode::Draw => {
                self.draw_gesture = Some((point, point));
            }
            DrawingMode::Select => {
                self.moving = self.canvas.select_at(point).is_some();
            }
            DrawingMode::Erase => {
                if self.canvas.erase_at(point).is_some() {
                    self.canvas.clear_selection();
                    self.mark_modified();
                }
            }
        }
    }

    /// Updates the rubber band, or drags the selected shape by its center.
    pub fn pointer_moved(&mut self, point: Point) {
        if let Some((_, current)) = self.draw_gesture.as_mut() {
            *current = point;
            return;
        }

        if self.moving && self.canvas.translate_selected(point) {
            self.mark_modified();
        }
    }

    /// Finishes the gesture started by [`pointer_pressed`](Self::pointer_pressed).
    ///
    /// Returns the index of a newly created shape.
    pub fn pointer_released(&mut self, point: Point, button: PointerButton) -> Option<usize> {
        if button != PointerButton::Primary {
            return None;
        }

        match self.mode {
            DrawingMode::Draw => {
                let (anchor, _) = self.draw_gesture.take()?;
                let index = self.canvas.add_from_corners(self.shape_type, anchor, point);
                self.mark_modified();
                Some(index)
            }
            DrawingMode::Select => {
                self.moving = false;
                None
            }
            DrawingMode::None | DrawingMode::Erase => None,
        }
    }
}
