//! Data models for canvas coordinates and colors
//!
//! This module provides:
//! - Integer canvas points as delivered by pointer events
//! - RGB colors used for shape outlines and highlighting
//! - The policy applied when a drawing file contains malformed records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the canvas in integer device units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, growing to the right
    pub x: i32,
    /// Vertical position, growing downwards
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise `other - self`, widened so it cannot overflow
    pub fn delta_to(&self, other: &Point) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default outline color of every shape
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Outline color of the selected shape
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// What to do when a drawing file contains a malformed record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Reject the whole file; the current drawing is left unchanged
    #[default]
    Strict,
    /// Skip the bad line, log it and keep loading
    SkipInvalid,
}
