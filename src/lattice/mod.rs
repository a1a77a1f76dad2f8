//! Polygon lattices laid over an image plane
//!
//! A [`Strategy`] selects one of three tilings. Every tiling is a pure function
//! of `(width, height, tile_size)` and is exposed as a [`Lattice`], a lazy
//! iterator that knows its exact length up front. Calling [`generate`] again
//! with the same inputs restarts the same sequence.

/// Staggered rhombus tiling with vertices clamped to the image
pub mod diamond;
/// Equilateral triangle tiling with overscan past every edge
pub mod equilateral;
/// Square cells split along the main diagonal
pub mod right_triangle;

use crate::geometry::Polygon;
use crate::io::error::{Result, invalid_parameter, require_positive};
use diamond::DiamondGrid;
use equilateral::EquilateralGrid;
use right_triangle::RightTriangleGrid;
use std::fmt;

/// Tiling strategy used to partition the image plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Square grid from the origin, each full cell split into two right triangles
    RightTriangleGrid,
    /// Alternating up/down equilateral triangles, overscanned and clipped at the edges
    EquilateralTriangleGrid,
    /// Staggered diamonds whose vertices are clamped into the image
    Diamond,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Self; 3] = [
        Self::RightTriangleGrid,
        Self::EquilateralTriangleGrid,
        Self::Diamond,
    ];

    /// Tile size used when none is configured
    pub const fn default_tile_size(self) -> u32 {
        match self {
            Self::RightTriangleGrid => 55,
            Self::EquilateralTriangleGrid => 40,
            Self::Diamond => 30,
        }
    }

    /// Smallest tile size the strategy accepts
    pub const fn min_tile_size(self) -> u32 {
        match self {
            Self::RightTriangleGrid | Self::EquilateralTriangleGrid => 1,
            // Diamonds step by half a tile, which must not be zero
            Self::Diamond => 2,
        }
    }

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::RightTriangleGrid => "right-triangle",
            Self::EquilateralTriangleGrid => "equilateral",
            Self::Diamond => "diamond",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Row/column layout of lattice cells, each cell emitting a fixed number of polygons
///
/// Rows may hold different numbers of cells (staggered lattices), but every
/// count is known before iteration starts.
pub trait CellLayout {
    /// Number of cell rows
    fn rows(&self) -> usize;

    /// Number of cells in `row`
    fn cols(&self, row: usize) -> usize;

    /// Polygons emitted per cell
    fn polygons_per_cell(&self) -> usize;

    /// The `index`-th polygon of the cell at (`row`, `col`)
    fn polygon(&self, row: usize, col: usize, index: usize) -> Polygon;

    /// Total number of polygons in the lattice
    fn polygon_count(&self) -> usize {
        (0..self.rows()).map(|row| self.cols(row)).sum::<usize>() * self.polygons_per_cell()
    }
}

#[derive(Debug, Clone, Copy)]
enum Geometry {
    RightTriangle(RightTriangleGrid),
    Equilateral(EquilateralGrid),
    Diamond(DiamondGrid),
}

impl Geometry {
    fn layout(&self) -> &dyn CellLayout {
        match self {
            Self::RightTriangle(grid) => grid,
            Self::Equilateral(grid) => grid,
            Self::Diamond(grid) => grid,
        }
    }
}

/// Lazy, finite sequence of lattice polygons in generation order
///
/// Order is row-major over cells, then the per-cell polygon index. Overlapping
/// pixels are resolved by this order when painting (last writer wins).
#[derive(Debug, Clone)]
pub struct Lattice {
    geometry: Geometry,
    row: usize,
    col: usize,
    index: usize,
    remaining: usize,
}

impl Lattice {
    fn new(geometry: Geometry) -> Self {
        let remaining = geometry.layout().polygon_count();
        Self {
            geometry,
            row: 0,
            col: 0,
            index: 0,
            remaining,
        }
    }

    fn advance(&mut self) {
        let layout = self.geometry.layout();
        self.index += 1;
        if self.index < layout.polygons_per_cell() {
            return;
        }
        self.index = 0;
        self.col += 1;
        while self.row < layout.rows() && self.col >= layout.cols(self.row) {
            self.col = 0;
            self.row += 1;
        }
    }
}

impl Iterator for Lattice {
    type Item = Polygon;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let layout = self.geometry.layout();
        // Skip leading rows that hold no cells
        while self.row < layout.rows() && layout.cols(self.row) == 0 {
            self.row += 1;
        }
        if self.row >= layout.rows() {
            self.remaining = 0;
            return None;
        }
        let polygon = layout.polygon(self.row, self.col, self.index);
        self.remaining -= 1;
        self.advance();
        Some(polygon)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Lattice {}

impl std::iter::FusedIterator for Lattice {}

/// Produce the polygon lattice for an image of `width` x `height` pixels
///
/// # Errors
///
/// Returns `InvalidParameter` if a dimension or the tile size is zero, if the
/// tile size is below the strategy minimum, or if a dimension or the
/// lattice's overscan does not fit in signed 32-bit pixel coordinates.
pub fn generate(width: u32, height: u32, tile_size: u32, strategy: Strategy) -> Result<Lattice> {
    let width = signed_dimension("width", width)?;
    let height = signed_dimension("height", height)?;
    let tile_size = signed_dimension("tile_size", tile_size)?;

    if tile_size.unsigned_abs() < strategy.min_tile_size() {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!(
                "the {strategy} strategy needs a tile size of at least {}",
                strategy.min_tile_size()
            ),
        ));
    }

    let geometry = match strategy {
        Strategy::RightTriangleGrid => {
            Geometry::RightTriangle(RightTriangleGrid::new(width, height, tile_size))
        }
        Strategy::EquilateralTriangleGrid => {
            Geometry::Equilateral(EquilateralGrid::new(width, height, tile_size)?)
        }
        Strategy::Diamond => Geometry::Diamond(DiamondGrid::new(width, height, tile_size)),
    };
    Ok(Lattice::new(geometry))
}

fn signed_dimension(parameter: &'static str, value: u32) -> Result<i32> {
    let value = require_positive(parameter, value)?;
    i32::try_from(value).map_err(|_overflow| {
        invalid_parameter(parameter, &value, &"exceeds the supported coordinate range")
    })
}
