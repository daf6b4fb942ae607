//! Command line interface for vecdraw
//!
//! Every subcommand works on a drawing file: one shape record per line.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// vecdraw CLI arguments
///
/// Examples:
///   vecdraw info sketch.vdr                  # List shapes
///   vecdraw render sketch.vdr -o sketch.png  # Rasterize
///   vecdraw hit sketch.vdr 18 18 --erase     # Which shape would erase delete
///   vecdraw move sketch.vdr 0 100 50         # Center shape 0 on (100, 50)
///   vecdraw normalize old.vdr --skip-invalid # Drop unreadable records
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "vecdraw",
    version,
    long_version = LONG_VERSION,
    about = "Inspect, edit and render vecdraw drawings"
)]
pub struct CliArgs {
    /// Settings file (JSON or TOML)
    ///
    /// Defaults to `<config dir>/vecdraw/config.toml` when present.
    #[clap(long = "config", short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List shapes with index, kind, bounds and center
    Info {
        file: PathBuf,
    },

    /// Render a drawing to PNG
    Render {
        file: PathBuf,
        #[clap(short = 'o', long = "output")]
        output: PathBuf,
        /// Image width, overrides the configured canvas width
        #[clap(long)]
        width: Option<u32>,
        /// Image height, overrides the configured canvas height
        #[clap(long)]
        height: Option<u32>,
        /// Draw the shape at this index highlighted
        #[clap(long)]
        select: Option<usize>,
    },

    /// Report which shape a click at (X, Y) resolves to
    Hit {
        file: PathBuf,
        #[clap(allow_negative_numbers = true)]
        x: i32,
        #[clap(allow_negative_numbers = true)]
        y: i32,
        /// Resolve like erase mode (newest shape first) instead of select mode
        #[clap(long)]
        erase: bool,
    },

    /// Move a shape so its center lands on (X, Y)
    Move {
        file: PathBuf,
        index: usize,
        #[clap(allow_negative_numbers = true)]
        x: i32,
        #[clap(allow_negative_numbers = true)]
        y: i32,
        /// Write here instead of overwriting FILE
        #[clap(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Reload and re-save a drawing in canonical form
    Normalize {
        file: PathBuf,
        /// Write here instead of overwriting FILE
        #[clap(short = 'o', long = "output")]
        output: Option<PathBuf>,
        /// Drop malformed records instead of failing
        #[clap(long = "skip-invalid")]
        skip_invalid: bool,
    },
}
