//! Low-poly mosaics from raster images
//!
//! The image plane is partitioned into a lattice of convex polygons (right
//! triangles, equilateral triangles or diamonds). Each polygon is filled with
//! the mean color of the source pixels beneath it.

#![forbid(unsafe_code)]

/// Points, polygons and the shared rasterization rule
pub mod geometry;
/// Image loading, saving, command line and error handling
pub mod io;
/// Polygon lattice generation for each tiling strategy
pub mod lattice;
/// Region averaging, painting and the render loop
pub mod mosaic;

pub use io::error::{MosaicError, Result};
pub use lattice::{Lattice, Strategy, generate};
pub use mosaic::{CanvasInit, PixelGrid, RenderConfig, RenderStats, render};
