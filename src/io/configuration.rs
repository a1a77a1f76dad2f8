//! Runtime configuration defaults

// Paths used when the command line leaves them out
/// Default source image
pub const DEFAULT_INPUT_FILE: &str = "test_org3.png";
/// Default destination image
pub const DEFAULT_OUTPUT_FILE: &str = "45_test_output.png";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Polygons painted between progress bar redraws
pub const PROGRESS_UPDATE_INTERVAL: usize = 64;
