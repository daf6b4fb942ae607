//! # vecdraw Designer
//!
//! Shape core of a small 2D vector editor: lines, rectangles and ellipses
//! kept in an ordered collection with single selection, hit-testing,
//! translation, a plain-text drawing format and raster rendering.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (mode, gestures, file state)
//!   └── Canvas (ordered shapes, draw order = insertion order)
//!         ├── SelectionManager (one selected index)
//!         └── Shapes (Line, Rectangle, Ellipse)
//!
//! Serialization (one text record per shape)
//! Renderer (RenderSurface trait, tiny-skia pixmap)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vecdraw_designer::{Canvas, HitOrder, Point};
//!
//! let mut canvas = Canvas::new();
//! canvas.add_rectangle(Point::new(0, 0), Point::new(20, 20));
//! canvas.add_ellipse(Point::new(10, 10), Point::new(30, 30));
//!
//! // Select scans oldest first, erase scans newest first.
//! assert_eq!(canvas.find_hit(Point::new(18, 18), HitOrder::FrontToBack), Some(0));
//! assert_eq!(canvas.find_hit(Point::new(18, 18), HitOrder::BackToFront), Some(1));
//! ```

pub mod canvas;
pub mod designer_state;
pub mod model;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;

pub use canvas::{Canvas, HitOrder};
pub use designer_state::{DesignerState, DrawingMode, PointerButton};
pub use model::{
    DesignEllipse, DesignLine, DesignRectangle, DesignerShape, Shape, ShapeBox, ShapeType,
};
pub use renderer::{render_canvas, Pen, PixmapSurface, RenderSurface, STROKE_WIDTH};
pub use selection_manager::SelectionManager;
pub use serialization::{LoadReport, SkippedRecord};
pub use vecdraw_core::{Color, LoadPolicy, Point};
