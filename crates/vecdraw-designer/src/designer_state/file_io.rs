//! File I/O operations (save, load, new) for designer state.

use super::DesignerState;
use crate::serialization::{self, LoadReport};

impl DesignerState {
    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        serialization::save_to_file(&path, self.canvas.shapes())?;

        // Update state
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Load design from file.
    ///
    /// The canvas is only replaced when the file loads under the current
    /// [`load_policy`](Self::load_policy); on error it is left untouched.
    pub fn load_from_file(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> anyhow::Result<LoadReport> {
        let mut report = serialization::load_from_file(&path, self.load_policy)?;

        // Loaded shapes take the default color
        let color = self.canvas.default_color();
        for shape in &mut report.shapes {
            shape.set_color(color);
        }
        self.canvas.replace_shapes(std::mem::take(&mut report.shapes));
        self.moving = false;
        self.draw_gesture = None;

        // Update state
        if let Some(stem) = path.as_ref().file_stem().and_then(|s| s.to_str()) {
            self.design_name = stem.to_string();
        }
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;

        Ok(report)
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.canvas.clear();
        self.moving = false;
        self.draw_gesture = None;
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = "Untitled".to_string();
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.design_name)
        } else {
            &self.design_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
