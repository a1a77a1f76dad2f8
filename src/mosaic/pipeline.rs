//! Lattice → average → paint orchestration
//!
//! Polygons are consumed one at a time in generation order. Each polygon is
//! rasterized once into row spans; the spans are averaged against the
//! read-only source and, when they cover any pixel, painted on the canvas and
//! recorded in the coverage mask. Polygons covering nothing are skipped.

use crate::geometry::{MaskBuffer, RowSpan, spans};
use crate::io::error::{Result, invalid_parameter, require_positive};
use crate::lattice::{Strategy, generate};
use crate::mosaic::averager::{mean_over_spans, round_color};
use crate::mosaic::compositor::fill_spans;
use crate::mosaic::grid::PixelGrid;

/// Starting contents of the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasInit {
    /// All-black canvas; unpainted pixels stay black
    #[default]
    Blank,
    /// Copy of the source; unpainted pixels keep their original color
    Source,
}

impl CanvasInit {
    /// Canvas start used by a strategy unless configured otherwise
    pub const fn default_for(strategy: Strategy) -> Self {
        match strategy {
            Strategy::RightTriangleGrid | Strategy::EquilateralTriangleGrid => Self::Blank,
            Strategy::Diamond => Self::Source,
        }
    }

    /// Build the initial canvas for `source`
    pub fn create(self, source: &PixelGrid) -> PixelGrid {
        match self {
            Self::Blank => PixelGrid::new(source.width(), source.height()),
            Self::Source => source.clone(),
        }
    }
}

/// Parameters of one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Tiling strategy
    pub strategy: Strategy,
    /// Pixels per tile edge
    pub tile_size: u32,
    /// Starting contents of the canvas
    pub canvas_init: CanvasInit,
}

impl RenderConfig {
    /// Strategy defaults for tile size and canvas start
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tile_size: strategy.default_tile_size(),
            canvas_init: CanvasInit::default_for(strategy),
        }
    }

    /// Replace the tile size
    #[must_use]
    pub const fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Replace the canvas start
    #[must_use]
    pub const fn with_canvas_init(mut self, canvas_init: CanvasInit) -> Self {
        self.canvas_init = canvas_init;
        self
    }

    /// Check the parameters that do not depend on the image
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile size is zero or below the
    /// strategy minimum
    pub fn validate(&self) -> Result<()> {
        let tile_size = require_positive("tile_size", self.tile_size)?;
        let minimum = self.strategy.min_tile_size();
        if tile_size < minimum {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &format!("the {} strategy needs at least {minimum}", self.strategy),
            ));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Strategy::RightTriangleGrid)
    }
}

/// Counters collected during a render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Polygons produced by the lattice
    pub generated: usize,
    /// Polygons that covered at least one pixel and were painted
    pub painted: usize,
    /// Polygons that covered no pixel
    pub skipped: usize,
    /// Canvas pixels no polygon painted
    pub uncovered_pixels: usize,
}

/// Render a low-poly mosaic of `source`
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration or the image dimensions are
/// invalid. Nothing is rendered in that case.
pub fn render(source: &PixelGrid, config: &RenderConfig) -> Result<(PixelGrid, RenderStats)> {
    render_with_observer(source, config, |_, _| {})
}

/// Render like [`render`], calling `observer(done, total)` after each polygon
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration or the image dimensions are
/// invalid. Nothing is rendered in that case.
pub fn render_with_observer(
    source: &PixelGrid,
    config: &RenderConfig,
    mut observer: impl FnMut(usize, usize),
) -> Result<(PixelGrid, RenderStats)> {
    config.validate()?;
    let width = image_dimension("width", source.width())?;
    let height = image_dimension("height", source.height())?;
    let lattice = generate(width, height, config.tile_size, config.strategy)?;

    let total = lattice.len();
    tracing::debug!(
        strategy = %config.strategy,
        tile_size = config.tile_size,
        polygons = total,
        "generated lattice"
    );

    let mut canvas = config.canvas_init.create(source);
    let mut coverage = MaskBuffer::new(source.width(), source.height());
    let mut stats = RenderStats {
        generated: total,
        ..RenderStats::default()
    };

    let mut row_spans: Vec<RowSpan> = Vec::new();
    for (done, polygon) in lattice.enumerate() {
        row_spans.clear();
        row_spans.extend(spans(&polygon, source.width(), source.height()));
        if let Some(color) = mean_over_spans(source, row_spans.iter().cloned()) {
            fill_spans(&mut canvas, row_spans.iter().cloned(), round_color(color));
            coverage.mark_spans(row_spans.iter().cloned());
            stats.painted += 1;
        } else {
            stats.skipped += 1;
        }
        observer(done + 1, total);
    }

    stats.uncovered_pixels = coverage.count_unset();
    tracing::debug!(
        painted = stats.painted,
        skipped = stats.skipped,
        uncovered = stats.uncovered_pixels,
        "rendered mosaic"
    );

    Ok((canvas, stats))
}

fn image_dimension(parameter: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_overflow| invalid_parameter(parameter, &value, &"image is too large"))
}
