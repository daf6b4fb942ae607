//! # vecdraw Core
//!
//! Core types shared by the vecdraw crates: integer canvas points, RGB colors,
//! the record loading policy and the unified error type.

pub mod data;
pub mod error;

pub use data::{Color, LoadPolicy, Point};

pub use error::{Error, RecordError, Result};
