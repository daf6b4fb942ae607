//! # vecdraw
//!
//! A small 2D vector editor core with a command-line front-end.
//!
//! ## Architecture
//!
//! vecdraw is organized as a workspace with multiple crates:
//!
//! 1. **vecdraw-core** - Point and color types, load policy, error types
//! 2. **vecdraw-settings** - User settings (JSON or TOML) with validation
//! 3. **vecdraw-designer** - Shapes, canvas, selection, drawing files, rendering
//! 4. **vecdraw** - Command-line binary that ties the crates together
//!
//! ## Features
//!
//! - **Shapes**: Lines, rectangles and ellipses in draw order
//! - **Editing**: Hit-testing, single selection, erase, move by center
//! - **Files**: One text record per shape, strict or lenient loading
//! - **Rendering**: Anti-aliased PNG output through tiny-skia

pub mod cli;
pub mod commands;

pub use vecdraw_core::{Color, Error, LoadPolicy, Point, Result};
pub use vecdraw_designer as designer;
pub use vecdraw_settings as settings;

/// Initialize logging
///
/// Sets up structured logging with tracing subscriber:
/// - Pretty formatting on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
