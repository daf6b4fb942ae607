//! Serialization and deserialization for drawing files.
//!
//! A drawing file is plain text with one shape per line and no header:
//!
//! ```text
//! Linea,<x1>,<y1>,<x2>,<y2>
//! Rectangulo,<x>,<y>,<width>,<height>
//! Elipse,<x>,<y>,<width>,<height>
//! ```
//!
//! All numbers are integers. Colors are not stored; loaded shapes get the
//! default color.

use anyhow::{Context, Result};
use std::path::Path;

use vecdraw_core::{Error, LoadPolicy, Point, RecordError};

use crate::model::{DesignEllipse, DesignLine, DesignRectangle, DesignerShape, Shape, ShapeType};

/// Numeric fields following the tag of every record.
const FIELD_COUNT: usize = 4;

/// A record dropped under [`LoadPolicy::SkipInvalid`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// One-based line number
    pub line: usize,
    pub content: String,
    pub reason: RecordError,
}

/// Result of parsing a drawing.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub shapes: Vec<Shape>,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub fn serialize_shape(shape: &Shape) -> String {
    shape.serialize()
}

/// Parses one record. `line` is only used for error reporting.
pub fn parse_record(record: &str, line: usize) -> vecdraw_core::Result<Shape> {
    parse_fields(record).map_err(|reason| Error::MalformedRecord { line, reason })
}

fn parse_fields(record: &str) -> std::result::Result<Shape, RecordError> {
    let record = record.trim();
    if record.is_empty() {
        return Err(RecordError::Empty);
    }

    let mut parts = record.split(',');
    let tag = parts.next().unwrap_or_default().trim();
    let kind =
        ShapeType::from_tag(tag).ok_or_else(|| RecordError::UnknownTag(tag.to_string()))?;

    let fields: Vec<&str> = parts.collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount {
            tag: tag.to_string(),
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let mut values = [0i32; FIELD_COUNT];
    for (i, field) in fields.iter().enumerate() {
        values[i] = field
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidNumber {
                field: i + 1,
                value: field.to_string(),
            })?;
    }
    let [a, b, c, d] = values;

    // Lines store both endpoints; boxes store a corner plus extents. Either
    // way the extent and the far corner must fit in `i32`.
    let in_range = match kind {
        ShapeType::Line => c.checked_sub(a).is_some() && d.checked_sub(b).is_some(),
        ShapeType::Rectangle | ShapeType::Ellipse => {
            a.checked_add(c).is_some() && b.checked_add(d).is_some()
        }
    };
    if !in_range {
        return Err(RecordError::CoordinateOverflow {
            tag: tag.to_string(),
        });
    }

    Ok(match kind {
        ShapeType::Line => Shape::Line(DesignLine::new(Point::new(a, b), Point::new(c, d))),
        ShapeType::Rectangle => Shape::Rectangle(DesignRectangle::new(a, b, c, d)),
        ShapeType::Ellipse => Shape::Ellipse(DesignEllipse::new(a, b, c, d)),
    })
}

/// One newline-terminated record per shape, in collection order.
pub fn to_text(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .map(|shape| format!("{}\n", serialize_shape(shape)))
        .collect()
}

/// Parses a whole drawing. Blank lines are ignored.
///
/// Under [`LoadPolicy::Strict`] the first malformed record aborts the load
/// with [`Error::MalformedRecord`]; under [`LoadPolicy::SkipInvalid`] it is
/// logged, reported in [`LoadReport::skipped`] and loading continues.
pub fn from_text(text: &str, policy: LoadPolicy) -> vecdraw_core::Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_fields(raw) {
            Ok(shape) => report.shapes.push(shape),
            Err(reason) => match policy {
                LoadPolicy::Strict => return Err(Error::MalformedRecord { line, reason }),
                LoadPolicy::SkipInvalid => {
                    tracing::warn!("Skipping line {}: {}", line, reason);
                    report.skipped.push(SkippedRecord {
                        line,
                        content: raw.to_string(),
                        reason,
                    });
                }
            },
        }
    }

    Ok(report)
}

/// Save shapes to a drawing file
pub fn save_to_file(path: impl AsRef<Path>, shapes: &[Shape]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_text(shapes))
        .with_context(|| format!("Failed to write drawing file {}", path.display()))?;
    tracing::info!("Saved {} shapes to {}", shapes.len(), path.display());
    Ok(())
}

/// Load shapes from a drawing file
pub fn load_from_file(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<LoadReport> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read drawing file {}", path.display()))?;
    let report = from_text(&content, policy)
        .with_context(|| format!("Failed to parse drawing file {}", path.display()))?;
    tracing::info!(
        "Loaded {} shapes from {} ({} skipped)",
        report.shapes.len(),
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}
