//! Tests for the right-triangle grid: cell counts, corner order and dropped borders

#[cfg(test)]
mod tests {
    use lowpoly::geometry::{MaskBuffer, Point, Polygon};
    use lowpoly::lattice::CellLayout;
    use lowpoly::lattice::right_triangle::RightTriangleGrid;
    use lowpoly::{Strategy, generate};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // Tests the two-triangles-per-full-cell count for several image shapes
    // Verified by rounding the cell count up instead of down
    #[test]
    fn test_triangle_count_drops_partial_cells() {
        for (width, height, tile, expected) in [
            (10, 10, 5, 8),
            (23, 17, 5, 24),
            (8, 8, 10, 0),
            (55, 54, 55, 0),
            (110, 56, 55, 4),
        ] {
            let lattice = generate(width, height, tile, Strategy::RightTriangleGrid).unwrap();
            assert_eq!(lattice.len(), expected, "{width}x{height} tile {tile}");
            assert_eq!(lattice.count(), expected, "{width}x{height} tile {tile}");
        }
    }

    // Tests the corner order of both halves of the first cell
    // Verified by swapping the bottom-left and bottom-right corners
    #[test]
    fn test_cell_corner_order() {
        let mut lattice = generate(10, 10, 5, Strategy::RightTriangleGrid).unwrap();

        assert_eq!(
            lattice.next(),
            Some(Polygon::triangle(p(0, 0), p(5, 0), p(0, 5)))
        );
        assert_eq!(
            lattice.next(),
            Some(Polygon::triangle(p(5, 0), p(0, 5), p(5, 5)))
        );
        // Row-major: the next cell is to the right
        assert_eq!(
            lattice.next(),
            Some(Polygon::triangle(p(5, 0), p(10, 0), p(5, 5)))
        );
    }

    // Tests that no cell reaches beyond the right or bottom edge
    // Verified by keeping cells whose corner passes the image edge
    #[test]
    fn test_cells_stay_inside_image() {
        let width = 23;
        let height = 17;
        for polygon in generate(width, height, 5, Strategy::RightTriangleGrid).unwrap() {
            assert_eq!(polygon.len(), 3);
            assert!(polygon.is_convex());
            let (min, max) = polygon.bounds();
            assert!(min.x >= 0 && min.y >= 0);
            assert!(max.x <= width as i32 && max.y <= height as i32);
        }
    }

    // Tests that both halves of each cell cover exactly the closed cell
    // Verified by using the main diagonal for only one half
    #[test]
    fn test_cell_halves_partition_cell() {
        let grid = RightTriangleGrid::new(12, 12, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(0), 3);

        let mut mask = MaskBuffer::new(12, 12);
        mask.mark(&grid.polygon(1, 1, 0));
        mask.mark(&grid.polygon(1, 1, 1));

        assert_eq!(mask.count(), 25);
        assert!(mask.iter_set().all(|(x, y)| (4..=8).contains(&x) && (4..=8).contains(&y)));
    }

    // Tests a cell ending exactly on the image edge is kept and fully painted
    // Verified by keeping only cells strictly inside the image
    #[test]
    fn test_exact_fit_cell_kept() {
        let polygons: Vec<_> = generate(10, 5, 5, Strategy::RightTriangleGrid)
            .unwrap()
            .collect();

        assert_eq!(polygons.len(), 4);
        assert_eq!(
            polygons.last(),
            Some(&Polygon::triangle(p(10, 0), p(5, 5), p(10, 5)))
        );

        let mut mask = MaskBuffer::new(10, 5);
        for polygon in &polygons {
            mask.mark(polygon);
        }
        assert_eq!(mask.count_unset(), 0);
    }
}
