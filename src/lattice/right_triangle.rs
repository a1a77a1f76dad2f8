//! Right-triangle grid
//!
//! Square cells of side `tile_size` start at the origin. Only cells that fit
//! entirely inside the image are emitted, so a strip narrower than one tile
//! along the right and bottom edges is left uncovered.
//!
//! A cell whose far corner lands exactly on the image edge
//! (`x + tile_size == width`) is kept rather than dropped, although the
//! corner point itself is one pixel past the last column. This makes the
//! lattice hold exactly `2 * (width / tile_size) * (height / tile_size)`
//! triangles, and an image whose sides are multiples of the tile size is
//! covered completely.

use crate::geometry::{Point, Polygon};
use crate::lattice::CellLayout;

/// Square cells split along the top-right to bottom-left diagonal
#[derive(Debug, Clone, Copy)]
pub struct RightTriangleGrid {
    tile_size: i32,
    rows: usize,
    cols: usize,
}

impl RightTriangleGrid {
    /// Layout for a `width` x `height` image; all arguments must be positive
    pub fn new(width: i32, height: i32, tile_size: i32) -> Self {
        let tile = tile_size.max(1);
        // Floor division keeps every cell with x + tile <= width
        Self {
            tile_size: tile,
            rows: (height.max(0) / tile) as usize,
            cols: (width.max(0) / tile) as usize,
        }
    }
}

impl CellLayout for RightTriangleGrid {
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
        let x = col as i32 * t;
        let y = row as i32 * t;
        let top_left = Point::new(x, y);
        let top_right = Point::new(x + t, y);
        let bottom_left = Point::new(x, y + t);
        let bottom_right = Point::new(x + t, y + t);

        if index == 0 {
            Polygon::triangle(top_left, top_right, bottom_left)
        } else {
            Polygon::triangle(top_right, bottom_left, bottom_right)
        }
    }
}
