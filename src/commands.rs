//! Subcommand implementations.
//!
//! Each command returns the text to print so the binary stays a thin shell.

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::cli::{CliArgs, Command};
use vecdraw_core::{LoadPolicy, Point};
use vecdraw_designer::{DesignerShape, DesignerState, HitOrder, PixmapSurface};
use vecdraw_settings::Config;

/// Settings in effect for one invocation and where they came from.
pub struct Session {
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl Session {
    /// Session with the given settings that never writes them back.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            config_path: None,
        }
    }

    /// Loads `--config` when given, else the default settings file when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let config = Config::load_from_file(path)
                    .with_context(|| format!("Failed to load settings {}", path.display()))?;
                Ok(Self {
                    config,
                    config_path: Some(path.to_path_buf()),
                })
            }
            None => {
                let path = Config::default_path().ok();
                let config = match &path {
                    Some(path) => Config::load_or_default(path).with_context(|| {
                        format!("Failed to load settings {}", path.display())
                    })?,
                    None => Config::default(),
                };
                Ok(Self {
                    config,
                    config_path: path.filter(|p| p.exists()),
                })
            }
        }
    }

    fn designer(&self) -> DesignerState {
        DesignerState::with_config(&self.config)
    }

    fn open(&self, file: &Path) -> Result<DesignerState> {
        let mut state = self.designer();
        let report = state.load_from_file(file)?;
        for skipped in &report.skipped {
            tracing::warn!(
                "{}:{}: dropped '{}' ({})",
                file.display(),
                skipped.line,
                skipped.content,
                skipped.reason
            );
        }
        Ok(state)
    }

    /// Remembers a written drawing in the recent files list of a settings file on disk.
    fn remember(&mut self, file: &Path) {
        let Some(config_path) = self.config_path.clone() else {
            return;
        };
        self.config.add_recent_file(file.to_path_buf());
        if let Err(e) = self.config.save_to_file(&config_path) {
            tracing::warn!("Could not update recent files: {}", e);
        }
    }
}

/// Runs the parsed command line and returns what should be printed.
pub fn run(args: CliArgs) -> Result<String> {
    let mut session = Session::load(args.config.as_deref())?;

    match args.command {
        Command::Info { file } => info(&session, &file),
        Command::Render {
            file,
            output,
            width,
            height,
            select,
        } => render(&session, &file, &output, width, height, select),
        Command::Hit { file, x, y, erase } => hit(&session, &file, Point::new(x, y), erase),
        Command::Move {
            file,
            index,
            x,
            y,
            output,
        } => move_shape(&mut session, &file, index, Point::new(x, y), output.as_deref()),
        Command::Normalize {
            file,
            output,
            skip_invalid,
        } => normalize(&mut session, &file, output.as_deref(), skip_invalid),
    }
}

pub fn info(session: &Session, file: &Path) -> Result<String> {
    let state = session.open(file)?;
    let mut out = String::new();

    writeln!(out, "{}: {} shapes", file.display(), state.canvas.len())?;
    for (index, shape) in state.canvas.shapes().iter().enumerate() {
        let (min_x, min_y, max_x, max_y) = shape.bounds();
        writeln!(
            out,
            "{:>4}  {:<9}  bounds ({}, {})..({}, {})  center {}",
            index,
            shape.shape_type(),
            min_x,
            min_y,
            max_x,
            max_y,
            shape.center()
        )?;
    }
    if let Some((min_x, min_y, max_x, max_y)) = state.canvas.bounds() {
        writeln!(out, "extent ({}, {})..({}, {})", min_x, min_y, max_x, max_y)?;
    }
    Ok(out)
}

pub fn render(
    session: &Session,
    file: &Path,
    output: &Path,
    width: Option<u32>,
    height: Option<u32>,
    select: Option<usize>,
) -> Result<String> {
    let mut state = session.open(file)?;
    if let Some(index) = select {
        state.canvas.set_selected(index)?;
    }

    let canvas_settings = &session.config.canvas;
    let width = width.unwrap_or(canvas_settings.width);
    let height = height.unwrap_or(canvas_settings.height);
    let Some(mut surface) = PixmapSurface::new(width, height, canvas_settings.background_color)
    else {
        bail!("Cannot render a {}x{} image", width, height);
    };
    state.render(&mut surface);
    surface.save_png(output)?;

    Ok(format!("Rendered {} shapes to {}\n", state.canvas.len(), output.display()))
}

/// Resolves a click the same way the editor does in select or erase mode.
pub fn hit(session: &Session, file: &Path, point: Point, erase: bool) -> Result<String> {
    let state = session.open(file)?;
    let (verb, order) = if erase {
        ("erase", HitOrder::BackToFront)
    } else {
        ("select", HitOrder::FrontToBack)
    };

    let found = state
        .canvas
        .find_hit(point, order)
        .and_then(|index| state.canvas.get(index).map(|shape| (index, shape)));
    Ok(match found {
        Some((index, shape)) => format!(
            "{} {} hits shape {} ({})\n",
            verb,
            point,
            index,
            shape.shape_type()
        ),
        None => format!("{} {} hits nothing\n", verb, point),
    })
}

pub fn move_shape(
    session: &mut Session,
    file: &Path,
    index: usize,
    target: Point,
    output: Option<&Path>,
) -> Result<String> {
    let mut state = session.open(file)?;
    state.canvas.translate_at(index, target)?;

    let output = output.unwrap_or(file);
    state.save_to_file(output)?;
    session.remember(output);

    Ok(format!("Moved shape {} to center {}\n", index, target))
}

pub fn normalize(
    session: &mut Session,
    file: &Path,
    output: Option<&Path>,
    skip_invalid: bool,
) -> Result<String> {
    let mut state = session.designer();
    if skip_invalid {
        state.load_policy = LoadPolicy::SkipInvalid;
    }
    let report = state.load_from_file(file)?;

    let output = output.unwrap_or(file);
    state.save_to_file(output)?;
    session.remember(output);

    Ok(format!(
        "Wrote {} shapes to {} ({} records dropped)\n",
        state.canvas.len(),
        output.display(),
        report.skipped.len()
    ))
}
