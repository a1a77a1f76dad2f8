//! Staggered diamond lattice
//!
//! Centers sit on rows `half = tile_size / 2` apart; even rows start at
//! `x = 0`, odd rows at `x = half`, and centers on a row are `2 * half` apart.
//! Each diamond reaches `half` pixels up, right, down and left of its center.
//!
//! Vertices are clamped into the image before rasterization instead of being
//! clipped by it. Diamonds that cross the border are squashed onto the edge
//! rather than cut, which is a known approximation of this lattice.

use crate::geometry::{Point, Polygon};
use crate::lattice::CellLayout;
use num_traits::clamp;

/// Staggered rhombus lattice with clamped vertices
#[derive(Debug, Clone, Copy)]
pub struct DiamondGrid {
    half: i64,
    max_x: i64,
    max_y: i64,
    rows: usize,
    even_cols: usize,
    odd_cols: usize,
}

impl DiamondGrid {
    /// Layout for a `width` x `height` image; `tile_size` must be at least 2
    pub fn new(width: i32, height: i32, tile_size: i32) -> Self {
        let half = i64::from((tile_size / 2).max(1));
        let width = i64::from(width.max(1));
        let height = i64::from(height.max(1));
        let step = 2 * half;
        Self {
            half,
            max_x: width - 1,
            max_y: height - 1,
            // Centers while y < height + half
            rows: ceil_div(height + half, half),
            // Even rows: x = c*step while x < width + half
            even_cols: ceil_div(width + half, step),
            // Odd rows: x = half + c*step while x < width + half
            odd_cols: ceil_div(width, step),
        }
    }

    /// Half of the tile size; the diamond radius and the row spacing
    pub const fn half(&self) -> i64 {
        self.half
    }

    /// Center `(x, y)` of the diamond in cell (`row`, `col`), possibly off the image
    pub const fn center(&self, row: usize, col: usize) -> (i64, i64) {
        let offset = if row % 2 == 1 { self.half } else { 0 };
        (
            offset + col as i64 * 2 * self.half,
            row as i64 * self.half,
        )
    }

    fn clamp_point(&self, x: i64, y: i64) -> Point {
        // Both bounds come from i32 image dimensions, so the casts are lossless
        Point::new(clamp(x, 0, self.max_x) as i32, clamp(y, 0, self.max_y) as i32)
    }
}

const fn ceil_div(value: i64, divisor: i64) -> usize {
    ((value + divisor - 1) / divisor) as usize
}

impl CellLayout for DiamondGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self, row: usize) -> usize {
        if row % 2 == 1 {
            self.odd_cols
        } else {
            self.even_cols
        }
    }

    fn polygons_per_cell(&self) -> usize {
        1
    }

    fn polygon(&self, row: usize, col: usize, _index: usize) -> Polygon {
        let (x, y) = self.center(row, col);
        let half = self.half;
        Polygon::quad(
            self.clamp_point(x, y - half),
            self.clamp_point(x + half, y),
            self.clamp_point(x, y + half),
            self.clamp_point(x - half, y),
        )
    }
}
