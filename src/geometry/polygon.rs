//! Integer points and convex polygons in image coordinates
//!
//! Points carry no bounds invariant: lattice generators freely place vertices
//! outside the image and rely on rasterization to clip them.

use crate::io::error::{Result, invalid_parameter};

/// Integer 2D coordinate in pixel units, `x` to the right and `y` down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Closed convex polygon given by its vertices in order
///
/// Edges run between consecutive vertices and from the last vertex back to
/// the first. Convexity is guaranteed by whoever builds the polygon; the
/// rasterizer does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from at least three vertices
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if fewer than three vertices are given
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(invalid_parameter(
                "vertices",
                &vertices.len(),
                &"a polygon needs at least three vertices",
            ));
        }
        Ok(Self { vertices })
    }

    /// Triangle through three points
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: vec![a, b, c],
        }
    }

    /// Quadrilateral through four points
    pub fn quad(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self {
            vertices: vec![a, b, c, d],
        }
    }

    /// Vertices in edge order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a polygon has at least three vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate edges as `(start, end)` pairs, closing the last to the first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| (a, b))
    }

    /// Inclusive bounding box as `(min, max)` corners
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = Point::new(i32::MAX, i32::MAX);
        let mut max = Point::new(i32::MIN, i32::MIN);
        for vertex in &self.vertices {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
        }
        (min, max)
    }

    /// Twice the signed area (shoelace); positive for clockwise winding in image space
    pub fn doubled_area(&self) -> i64 {
        self.edges()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum()
    }

    /// Check that every turn has the same orientation
    ///
    /// Collinear and repeated vertices are tolerated, so clamped or collapsed
    /// shapes still count as (degenerate) convex polygons.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sign = 0i64;
        for i in 0..n {
            let (Some(a), Some(b), Some(c)) = (
                self.vertices.get(i),
                self.vertices.get((i + 1) % n),
                self.vertices.get((i + 2) % n),
            ) else {
                return false;
            };
            let turn = cross(*a, *b, *c).signum();
            if turn == 0 {
                continue;
            }
            if sign == 0 {
                sign = turn;
            } else if turn != sign {
                return false;
            }
        }
        // A consistent turn direction still allows a star that winds twice
        let winding: f64 = self
            .turn_angles()
            .map(f64::abs)
            .sum::<f64>();
        winding <= 2.0f64.mul_add(std::f64::consts::PI, 1e-9)
    }

    fn turn_angles(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.vertices.len();
        (0..n).filter_map(move |i| {
            let a = self.vertices.get(i)?;
            let b = self.vertices.get((i + 1) % n)?;
            let c = self.vertices.get((i + 2) % n)?;
            let (ux, uy) = (f64::from(b.x - a.x), f64::from(b.y - a.y));
            let (vx, vy) = (f64::from(c.x - b.x), f64::from(c.y - b.y));
            if (ux == 0.0 && uy == 0.0) || (vx == 0.0 && vy == 0.0) {
                return None;
            }
            Some(ux.mul_add(vy, -(uy * vx)).atan2(ux.mul_add(vx, uy * vy)))
        })
    }
}

/// Cross product of `ab` and `bc`
fn cross(a: Point, b: Point, c: Point) -> i64 {
    let (ux, uy) = (i64::from(b.x - a.x), i64::from(b.y - a.y));
    let (vx, vy) = (i64::from(c.x - b.x), i64::from(c.y - b.y));
    ux * vy - uy * vx
}
