//! Command-line interface and the top-level render driver

use crate::io::configuration::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::io::error::Result;
use crate::io::image::{load, save};
use crate::io::progress::ProgressReporter;
use crate::lattice::Strategy;
use crate::mosaic::pipeline::{CanvasInit, RenderConfig, RenderStats, render_with_observer};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

/// Tiling strategy as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Square cells split into two right triangles
    RightTriangle,
    /// Staggered equilateral triangles
    Equilateral,
    /// Staggered diamonds
    Diamond,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RightTriangle => Self::RightTriangleGrid,
            StrategyArg::Equilateral => Self::EquilateralTriangleGrid,
            StrategyArg::Diamond => Self::Diamond,
        }
    }
}

/// Canvas start as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasArg {
    /// Start from black
    Blank,
    /// Start from a copy of the input
    Source,
}

impl From<CanvasArg> for CanvasInit {
    fn from(arg: CanvasArg) -> Self {
        match arg {
            CanvasArg::Blank => Self::Blank,
            CanvasArg::Source => Self::Source,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lowpoly")]
#[command(author, version, about = "Converts an image to a low-poly mosaic")]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Path to the input image
    #[arg(long = "input_file", value_name = "PATH", default_value = DEFAULT_INPUT_FILE)]
    pub input_file: PathBuf,

    /// Path the mosaic is written to
    #[arg(long = "out_put", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Tile edge length in pixels (defaults depend on the strategy)
    #[arg(long = "tile_size", value_name = "PIXELS")]
    pub tile_size: Option<u32>,

    /// Tiling strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::RightTriangle)]
    pub strategy: StrategyArg,

    /// Initial canvas contents (defaults depend on the strategy)
    #[arg(long, value_enum)]
    pub canvas: Option<CanvasArg>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print debug diagnostics
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Resolve strategy defaults and validate the parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile size is zero or too small for the
    /// chosen strategy
    pub fn config(&self) -> Result<Config> {
        let strategy = Strategy::from(self.strategy);
        let mut render = RenderConfig::new(strategy);
        if let Some(tile_size) = self.tile_size {
            render = render.with_tile_size(tile_size);
        }
        if let Some(canvas) = self.canvas {
            render = render.with_canvas_init(canvas.into());
        }
        render.validate()?;

        Ok(Config {
            input_file: self.input_file.clone(),
            output_file: self.output_file.clone(),
            render,
            show_progress: !self.quiet,
        })
    }

    /// Maximum log level implied by the verbosity flags
    pub const fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Validated parameters of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source image path
    pub input_file: PathBuf,
    /// Destination image path
    pub output_file: PathBuf,
    /// Render parameters
    pub render: RenderConfig,
    /// Whether to draw a progress bar
    pub show_progress: bool,
}

/// Load, render and save according to `config`
///
/// Parameters are validated before the input is opened, and the output file is
/// only written once the whole mosaic has rendered.
///
/// # Errors
///
/// Returns an error if validation fails, the input cannot be decoded, or the
/// output cannot be written
pub fn run(config: &Config) -> Result<RenderStats> {
    config.render.validate()?;
    let start_time = Instant::now();
    tracing::info!(
        "Converting {} to {} with tile size {}.",
        config.input_file.display(),
        config.output_file.display(),
        config.render.tile_size
    );

    let source = load(&config.input_file)?;

    let progress = if config.show_progress {
        ProgressReporter::new()
    } else {
        ProgressReporter::hidden()
    };
    progress.start(&config.input_file);

    let (canvas, stats) = render_with_observer(&source, &config.render, |done, total| {
        progress.update(done, total);
    })?;
    progress.finish(&stats);

    save(&canvas, &config.output_file)?;
    tracing::info!(
        strategy = %config.render.strategy,
        polygons = stats.painted,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Low-poly mosaic saved at {}",
        config.output_file.display()
    );

    Ok(stats)
}

/// Install the stderr log subscriber for the binary
///
/// If a global subscriber is already installed, for example by an embedding
/// application or an earlier call, it is kept and the new level is ignored.
pub fn init_logging(level: tracing::Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(error) = installed {
        tracing::debug!(%error, "keeping the existing log subscriber");
    }
}
