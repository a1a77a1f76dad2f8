//! Input/output around the mosaic core
//!
//! This module contains:
//! - Command-line parsing and the run driver
//! - Configuration defaults
//! - Error types
//! - Image loading and saving
//! - Progress display

/// Command-line arguments and the top-level driver
pub mod cli;
/// Default values and display settings
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Image file decoding and encoding
pub mod image;
/// Progress bar for a render
pub mod progress;
