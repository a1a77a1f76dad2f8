//! Flat-fills polygons on the output canvas

use crate::geometry::{Polygon, RowSpan, spans};
use crate::mosaic::averager::{MeanColor, round_color};
use crate::mosaic::grid::PixelGrid;
use ndarray::{Axis, Slice};

/// Overwrite every pixel inside `polygon` with `color`
///
/// Uses the same membership rule as [`mean_color`](crate::mosaic::averager::mean_color).
/// The color is rounded to 8-bit channels. Pixels shared with earlier polygons
/// are overwritten. Returns the number of pixels painted.
pub fn paint(canvas: &mut PixelGrid, polygon: &Polygon, color: MeanColor) -> usize {
    fill(canvas, polygon, round_color(color))
}

/// Overwrite every pixel inside `polygon` with an exact 8-bit color
pub fn fill(canvas: &mut PixelGrid, polygon: &Polygon, rgb: [u8; 3]) -> usize {
    let (width, height) = (canvas.width(), canvas.height());
    fill_spans(canvas, spans(polygon, width, height), rgb)
}

/// Overwrite the pixels of already rasterized row spans with `rgb`
///
/// Spans reaching past the canvas are ignored. Returns the number of pixels
/// painted.
pub fn fill_spans(
    canvas: &mut PixelGrid,
    row_spans: impl IntoIterator<Item = RowSpan>,
    rgb: [u8; 3],
) -> usize {
    let mut painted = 0;

    for span in row_spans {
        let Some(mut row) = canvas.row_mut(span.y) else {
            continue;
        };
        if span.xs.end > row.len_of(Axis(0)) {
            continue;
        }
        let mut run = row.slice_axis_mut(Axis(0), Slice::from(span.xs.clone()));
        for mut pixel in run.outer_iter_mut() {
            for (slot, value) in pixel.iter_mut().zip(rgb) {
                *slot = value;
            }
        }
        painted += span.len();
    }

    painted
}
