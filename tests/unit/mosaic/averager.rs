//! Tests for polygon mean colors and channel rounding

#[cfg(test)]
mod tests {
    use lowpoly::PixelGrid;
    use lowpoly::geometry::{Point, Polygon, RowSpan, spans};
    use lowpoly::mosaic::averager::{mean_color, mean_over_spans, round_color};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // Tests the mean over a full square equals the per-channel average
    // Verified by dividing by the bounding box area instead of the pixel count
    #[test]
    fn test_mean_over_square() {
        let source = PixelGrid::from_fn(4, 4, |x, _| [x as u8 * 10, 100, 0]);
        let square = Polygon::quad(p(0, 0), p(3, 0), p(3, 3), p(0, 3));

        let mean = mean_color(&source, &square).unwrap();
        assert!((mean[0] - 15.0).abs() < 1e-9);
        assert!((mean[1] - 100.0).abs() < 1e-9);
        assert!(mean[2].abs() < 1e-9);
    }

    // Tests that only pixels inside a triangle contribute
    // Verified by averaging the whole bounding box
    #[test]
    fn test_mean_over_triangle() {
        // Upper-left triangle of a 2x2 cell holds (0,0), (1,0), (2,0), (0,1), (1,1), (0,2)
        let source = PixelGrid::from_fn(3, 3, |x, y| if x + y <= 2 { [60, 0, 0] } else { [255, 255, 255] });
        let triangle = Polygon::triangle(p(0, 0), p(2, 0), p(0, 2));

        assert_eq!(mean_color(&source, &triangle), Some([60.0, 0.0, 0.0]));
    }

    // Tests polygons covering no pixel report no color
    // Verified by returning black for empty polygons
    #[test]
    fn test_empty_polygon_has_no_mean() {
        let source = PixelGrid::filled(4, 4, [1, 2, 3]);
        let outside = Polygon::triangle(p(-10, -10), p(-5, -10), p(-10, -5));
        let sliver = Polygon::triangle(p(0, 0), p(3, 1), p(3, 1));
        let between = Polygon::triangle(p(1, 1), p(2, 1), p(1, 1));

        assert_eq!(mean_color(&source, &outside), None);
        assert_eq!(mean_color(&source, &sliver), Some([1.0, 2.0, 3.0]));
        // A degenerate polygon still covers the lattice points it touches
        assert_eq!(mean_color(&source, &between), Some([1.0, 2.0, 3.0]));
    }

    // Tests a clipped polygon averages only the visible part
    // Verified by counting clipped pixels in the denominator
    #[test]
    fn test_mean_clipped_to_grid() {
        let source = PixelGrid::from_fn(2, 2, |x, y| [(x + 2 * y) as u8 * 10, 0, 0]);
        let oversized = Polygon::quad(p(-5, -5), p(10, -5), p(10, 10), p(-5, 10));

        assert_eq!(mean_color(&source, &oversized), Some([15.0, 0.0, 0.0]));
    }

    // Tests rounding to the nearest channel value and clamping
    // Verified by truncating instead of rounding
    #[test]
    fn test_round_color() {
        assert_eq!(round_color([0.4, 127.5, 254.6]), [0, 128, 255]);
        assert_eq!(round_color([-3.0, 300.0, 10.49]), [0, 255, 10]);
    }

    // Tests averaging precomputed spans matches averaging the polygon
    // Verified by skipping the last span of each polygon
    #[test]
    fn test_mean_over_spans() {
        let source = PixelGrid::from_fn(6, 5, |x, y| [(x * 20) as u8, (y * 30) as u8, 5]);
        let triangle = Polygon::triangle(p(-1, 0), p(5, 1), p(2, 6));
        let row_spans: Vec<RowSpan> = spans(&triangle, 6, 5).collect();

        assert_eq!(
            mean_over_spans(&source, row_spans.iter().cloned()),
            mean_color(&source, &triangle)
        );
        assert_eq!(mean_over_spans(&source, Vec::new()), None);

        // Spans that do not fit the grid are ignored
        let foreign = vec![RowSpan { y: 0, xs: 4..9 }, RowSpan { y: 7, xs: 0..1 }];
        assert_eq!(mean_over_spans(&source, foreign), None);
    }
}
