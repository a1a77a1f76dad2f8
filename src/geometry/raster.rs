//! Convex polygon rasterization shared by averaging and painting
//!
//! A pixel belongs to a polygon when its integer sample point lies in the
//! closed polygon, edges and vertices included. Every consumer walks the same
//! [`spans`] iterator, so the membership rule has exactly one definition.
//! Rows are intersected with edges in exact integer arithmetic; no floating
//! point enters the inside/outside decision.

use crate::geometry::polygon::{Point, Polygon};
use bitvec::prelude::*;
use std::ops::Range;

/// Horizontal run of inside pixels on one row, already clipped to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpan {
    /// Row index
    pub y: usize,
    /// Column range, end exclusive
    pub xs: Range<usize>,
}

impl RowSpan {
    /// Number of pixels in the run
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when the run holds no pixels
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Inside pixels of `polygon` on a `width` x `height` grid, one span per row
///
/// Rows the polygon does not touch, and rows whose run falls entirely off the
/// grid, are omitted. Polygons fully outside the grid yield nothing.
pub fn spans(polygon: &Polygon, width: usize, height: usize) -> impl Iterator<Item = RowSpan> + '_ {
    let (min, max) = polygon.bounds();
    let rows = clip_range(min.y, max.y, height);
    rows.filter_map(move |y| {
        let (lo, hi) = row_extent(polygon, y as i64)?;
        let xs = clip_range_i64(lo, hi, width);
        (!xs.is_empty()).then_some(RowSpan { y, xs })
    })
}

/// Count of inside pixels of `polygon` on the grid
pub fn pixel_count(polygon: &Polygon, width: usize, height: usize) -> usize {
    spans(polygon, width, height).map(|span| span.len()).sum()
}

/// Inclusive `[ceil(min x), floor(max x)]` where row `y` meets the closed polygon
fn row_extent(polygon: &Polygon, y: i64) -> Option<(i64, i64)> {
    let mut lo = i64::MAX;
    let mut hi = i64::MIN;
    for (a, b) in polygon.edges() {
        let (ay, by) = (i64::from(a.y), i64::from(b.y));
        if y < ay.min(by) || y > ay.max(by) {
            continue;
        }
        if ay == by {
            lo = lo.min(i64::from(a.x.min(b.x)));
            hi = hi.max(i64::from(a.x.max(b.x)));
            continue;
        }
        let (num, den) = edge_crossing(a, b, y);
        lo = lo.min(div_ceil(num, den));
        hi = hi.max(num.div_euclid(den));
    }
    (lo <= hi).then_some((lo, hi))
}

/// Crossing of the non-horizontal edge `ab` with row `y` as `num / den`, `den > 0`
fn edge_crossing(a: Point, b: Point, y: i64) -> (i64, i64) {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let den = by - ay;
    let num = ax * den + (y - ay) * (bx - ax);
    if den < 0 { (-num, -den) } else { (num, den) }
}

const fn div_ceil(num: i64, den: i64) -> i64 {
    -((-num).div_euclid(den))
}

fn clip_range(lo: i32, hi: i32, limit: usize) -> Range<usize> {
    clip_range_i64(i64::from(lo), i64::from(hi), limit)
}

/// Clip the inclusive `[lo, hi]` to `0..limit`
fn clip_range_i64(lo: i64, hi: i64, limit: usize) -> Range<usize> {
    let limit = limit as i64;
    let start = lo.max(0);
    let end = hi.saturating_add(1).min(limit);
    if start >= end {
        0..0
    } else {
        start as usize..end as usize
    }
}

/// Reusable per-pixel bit mask over a fixed grid
///
/// Rasterizing into the mask goes through [`spans`], so a mask always agrees
/// with what averaging and painting touch. One buffer can be cleared and
/// refilled for every polygon instead of allocating a grid-sized mask each time.
#[derive(Clone, Debug)]
pub struct MaskBuffer {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl MaskBuffer {
    /// Create an empty mask
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Mask width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Mask height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Unset every pixel
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Set every inside pixel of `polygon`, keeping pixels already set
    ///
    /// Returns how many pixels were newly set.
    pub fn mark(&mut self, polygon: &Polygon) -> usize {
        let (width, height) = (self.width, self.height);
        self.mark_spans(spans(polygon, width, height))
    }

    /// Set the pixels of already rasterized row spans
    ///
    /// Spans reaching past the mask are ignored. Returns how many pixels were
    /// newly set.
    pub fn mark_spans(&mut self, row_spans: impl IntoIterator<Item = RowSpan>) -> usize {
        let mut newly_set = 0;
        for span in row_spans {
            if span.xs.end > self.width {
                continue;
            }
            let row_start = span.y * self.width;
            let Some(row) = self
                .bits
                .get_mut(row_start + span.xs.start..row_start + span.xs.end)
            else {
                continue;
            };
            newly_set += row.count_zeros();
            row.fill(true);
        }
        newly_set
    }

    /// Replace the mask contents with the inside pixels of `polygon`
    ///
    /// Returns the number of inside pixels.
    pub fn rasterize(&mut self, polygon: &Polygon) -> usize {
        self.clear();
        self.mark(polygon)
    }

    /// Test whether pixel `(x, y)` is set; off-grid pixels never are
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && self.bits.get(y * self.width + x).as_deref() == Some(&true)
    }

    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of unset pixels
    pub fn count_unset(&self) -> usize {
        self.bits.count_zeros()
    }

    /// Coordinates of the set pixels in row-major order
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width.max(1);
        self.bits
            .iter_ones()
            .map(move |index| (index % width, index / width))
    }
}
