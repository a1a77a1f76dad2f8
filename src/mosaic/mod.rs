//! Region averaging, canvas painting and the render loop
//!
//! This module contains:
//! - The RGB pixel grid shared by source and canvas
//! - Mean color of the pixels under a polygon
//! - Polygon fills on the canvas
//! - The orchestrating render loop

/// Mean color over a polygon's pixels
pub mod averager;
/// Flat polygon fills on the canvas
pub mod compositor;
/// RGB pixel storage
pub mod grid;
/// Render loop and its configuration
pub mod pipeline;

pub use averager::{MeanColor, mean_color, mean_over_spans};
pub use compositor::{fill_spans, paint};
pub use grid::PixelGrid;
pub use pipeline::{CanvasInit, RenderConfig, RenderStats, render};
