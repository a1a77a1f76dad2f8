//! Mean color of the source pixels under a polygon

use crate::geometry::{Polygon, RowSpan, spans};
use crate::mosaic::grid::PixelGrid;
use ndarray::{Axis, Slice};

/// Per-channel arithmetic mean in source channel units
pub type MeanColor = [f64; 3];

/// Average the source pixels inside `polygon`
///
/// Membership follows the shared rasterization rule, so exactly the pixels
/// [`paint`](crate::mosaic::compositor::paint) would overwrite are averaged.
/// Returns `None` when no pixel is inside: the polygon is off the grid or has
/// zero area. That is a normal outcome, not an error.
pub fn mean_color(source: &PixelGrid, polygon: &Polygon) -> Option<MeanColor> {
    mean_over_spans(source, spans(polygon, source.width(), source.height()))
}

/// Average the source pixels covered by already rasterized row spans
///
/// Spans outside the grid contribute nothing. Returns `None` when the spans
/// cover no pixel.
pub fn mean_over_spans(
    source: &PixelGrid,
    row_spans: impl IntoIterator<Item = RowSpan>,
) -> Option<MeanColor> {
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for span in row_spans {
        let Some(row) = source.row(span.y) else {
            continue;
        };
        if span.xs.end > row.len_of(Axis(0)) {
            continue;
        }
        let run = row.slice_axis(Axis(0), Slice::from(span.xs.clone()));
        for pixel in run.outer_iter() {
            for (sum, &value) in sums.iter_mut().zip(pixel.iter()) {
                *sum += u64::from(value);
            }
        }
        count += span.len() as u64;
    }

    (count > 0).then(|| sums.map(|sum| sum as f64 / count as f64))
}

/// Round a mean color to the nearest 8-bit channel values
pub fn round_color(mean: MeanColor) -> [u8; 3] {
    mean.map(|channel| channel.round().clamp(0.0, 255.0) as u8)
}
