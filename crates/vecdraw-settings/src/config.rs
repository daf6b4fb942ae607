//! Configuration and settings management for vecdraw
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Drawing settings (stroke width, colors, hit tolerance)
//! - Canvas settings (render size, background)
//! - File settings (load policy, recent files)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vecdraw_core::{Color, LoadPolicy};

/// Shape drawing preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Outline stroke width in canvas units
    pub stroke_width: f32,
    /// Color of newly created shapes
    pub default_color: Color,
    /// Color of the selected shape
    pub highlight_color: Color,
    /// A line is hit when the pointer is closer than this
    pub line_hit_tolerance: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            default_color: Color::WHITE,
            highlight_color: Color::YELLOW,
            line_hit_tolerance: 5.0,
        }
    }
}

/// Render surface preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: Color::rgb(52, 73, 94),
        }
    }
}

/// Drawing file preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Handling of malformed records when opening a drawing
    pub load_policy: LoadPolicy,
    /// Number of recent files to track
    pub recent_files_count: usize,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            load_policy: LoadPolicy::Strict,
            recent_files_count: 10,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub drawing: DrawingSettings,
    pub canvas: CanvasSettings,
    pub file: FileSettings,
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file (`<config dir>/vecdraw/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("vecdraw").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(unsupported(path)),
        };

        config.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => return Err(unsupported(path)),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let stroke = self.drawing.stroke_width;
        if !stroke.is_finite() || stroke <= 0.0 {
            return Err(SettingsError::invalid(
                "drawing.stroke_width",
                "must be positive",
            ));
        }

        let tolerance = self.drawing.line_hit_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SettingsError::invalid(
                "drawing.line_hit_tolerance",
                "must be positive",
            ));
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "dimensions must be > 0",
            ));
        }

        if self.file.recent_files_count == 0 {
            return Err(SettingsError::invalid(
                "file.recent_files_count",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.file.recent_files_count);
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn unsupported(path: &Path) -> SettingsError {
    SettingsError::UnsupportedFormat(format!(
        "{} (config file must be .json or .toml)",
        path.display()
    ))
}
