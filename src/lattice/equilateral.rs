//! Equilateral triangle grid
//!
//! Rows of height `h = round(tile_size * sqrt(3) / 2)` run from `-h` to past
//! `height + h`, and columns from `-tile_size` to past `width`, so the lattice
//! overscans every edge and rasterization clips the border triangles. Odd rows
//! shift right by half a tile.
//!
//! Horizontal positions are kept in half-pixel units and converted to pixels by
//! a single rounding function. Triangles that share a vertex therefore share
//! the exact same integer point, even for odd tile sizes, and the tiling stays
//! free of gaps.

use crate::geometry::{Point, Polygon};
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::CellLayout;

/// Alternating upward and downward triangles sharing horizontal base edges
#[derive(Debug, Clone, Copy)]
pub struct EquilateralGrid {
    tile_size: i64,
    row_height: i64,
    rows: usize,
    cols: usize,
}

impl EquilateralGrid {
    /// Layout for a `width` x `height` image; all arguments must be positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile is so large that the overscanned
    /// lattice reaches past the signed 32-bit pixel coordinate range
    pub fn new(width: i32, height: i32, tile_size: i32) -> Result<Self> {
        let tile = i64::from(tile_size.max(1));
        let row_height = i64::from(row_height(tile_size.max(1)));
        // Rows at y = -h + r*h while y < height + 2h
        let rows = ceil_div(i64::from(height.max(0)) + 3 * row_height, row_height);
        // Columns at x = -t + c*t while x < width + t
        let cols = ceil_div(i64::from(width.max(0)) + 2 * tile, tile);

        // Lowest apex sits at rows*h, rightmost corner at most at cols*t
        let reach = (rows * row_height).max(cols * tile);
        if reach > i64::from(i32::MAX) {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"the overscanned lattice exceeds the supported coordinate range",
            ));
        }

        Ok(Self {
            tile_size: tile,
            row_height,
            rows: rows as usize,
            cols: cols as usize,
        })
    }

    /// Vertical distance between consecutive rows
    pub const fn row_height(&self) -> i64 {
        self.row_height
    }
}

/// Triangle height for a tile side, rounded to whole pixels and never zero
pub fn row_height(tile_size: i32) -> i32 {
    let exact = f64::from(tile_size) * 3f64.sqrt() / 2.0;
    (exact.round() as i32).max(1)
}

const fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}

/// Pixel position of a half-pixel coordinate, rounding halves up
const fn half_to_pixel(half_units: i64) -> i64 {
    (half_units + 1).div_euclid(2)
}

/// Lattice vertex; the constructor bounds every vertex to the `i32` range
const fn vertex(x: i64, y: i64) -> Point {
    Point::new(x as i32, y as i32)
}

impl CellLayout for EquilateralGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self, _row: usize) -> usize {
        self.cols
    }

    fn polygons_per_cell(&self) -> usize {
        2
    }

    fn polygon(&self, row: usize, col: usize, index: usize) -> Polygon {
        let t = self.tile_size;
        let h = self.row_height;
        let y = -h + row as i64 * h;

        let stagger = if row % 2 == 1 { t } else { 0 };
        let left_half = 2 * (-t + col as i64 * t) + stagger;
        let left = half_to_pixel(left_half);
        let middle = half_to_pixel(left_half + t);
        let right = half_to_pixel(left_half + 2 * t);

        let base_left = vertex(left, y + h);
        let base_right = vertex(right, y + h);

        if index == 0 {
            Polygon::triangle(vertex(middle, y), base_right, base_left)
        } else {
            Polygon::triangle(base_left, base_right, vertex(middle, y + 2 * h))
        }
    }
}
