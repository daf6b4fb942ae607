//! Designer state manager for UI integration.
//! Owns the canvas plus the editor mode and turns pointer gestures into
//! canvas operations.
//!
//! This module is split into submodules:
//! - `input`: pointer press/move/release handling
//! - `file_io`: Save/load operations

mod file_io;
mod input;

use std::fmt;

use crate::canvas::Canvas;
use crate::model::{Shape, ShapeType};
use crate::renderer::{Pen, RenderSurface};
use crate::DesignerShape;
use vecdraw_core::{LoadPolicy, Point};
use vecdraw_settings::Config;

/// What a primary-button gesture does on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Pointer input is ignored
    #[default]
    None,
    /// Drag to create a shape of the current [`ShapeType`]
    Draw,
    /// Click to select, drag to move the selection
    Select,
    /// Click to delete the topmost shape under the pointer
    Erase,
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Draw => write!(f, "Draw"),
            Self::Select => write!(f, "Select"),
            Self::Erase => write!(f, "Erase"),
        }
    }
}

/// Pointer buttons reported by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    mode: DrawingMode,
    shape_type: ShapeType,
    /// Anchor and current point of an active draw gesture
    draw_gesture: Option<(Point, Point)>,
    moving: bool,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    pub load_policy: LoadPolicy,
}

impl DesignerState {
    /// Creates a new designer state.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            mode: DrawingMode::None,
            shape_type: ShapeType::Line,
            draw_gesture: None,
            moving: false,
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
            load_policy: LoadPolicy::Strict,
        }
    }

    /// Creates a designer state using the configured drawing preferences.
    pub fn with_config(config: &Config) -> Self {
        Self {
            canvas: Canvas::with_settings(&config.drawing),
            load_policy: config.file.load_policy,
            ..Self::new()
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Switches the editor mode. The selection is dropped first, so the
    /// highlight is gone before the new mode takes effect.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.canvas.selected_index().is_some() {
            self.canvas.clear_selection();
        }
        self.moving = false;
        self.draw_gesture = None;
        tracing::debug!("Drawing mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Chooses the kind of shape the next draw gesture creates.
    pub fn set_shape_type(&mut self, shape_type: ShapeType) {
        self.shape_type = shape_type;
    }

    pub fn is_drawing(&self) -> bool {
        self.draw_gesture.is_some()
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Rubber-band shape of the active draw gesture. Not part of the canvas.
    pub fn preview(&self) -> Option<Shape> {
        self.draw_gesture.map(|(anchor, current)| {
            let mut shape = Shape::from_corners(self.shape_type, anchor, current);
            shape.set_color(self.canvas.default_color());
            shape
        })
    }

    /// Draws the canvas, then the preview of an active draw gesture on top.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        self.canvas.render(surface);
        if let Some(preview) = self.preview() {
            let pen = Pen::new(preview.color()).with_width(self.canvas.stroke_width());
            preview.render(surface, pen);
        }
    }

    /// Removes every shape and clears the selection.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.moving = false;
        self.mark_modified();
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
