//! Plane geometry for lattice polygons
//!
//! This module contains:
//! - Integer points and convex polygons
//! - The shared convex rasterization rule and a reusable bit mask

/// Points, polygons and convexity checks
pub mod polygon;
/// Scanline rasterization and pixel masks
pub mod raster;

pub use polygon::{Point, Polygon};
pub use raster::{MaskBuffer, RowSpan, spans};
