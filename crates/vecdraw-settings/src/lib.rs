//! vecdraw Settings Crate
//!
//! Handles editor preferences and their persistence as JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, DrawingSettings, FileSettings};
pub use error::{SettingsError, SettingsResult};
