//! Tests for runtime configuration defaults

#[cfg(test)]
mod tests {
    use lowpoly::io::configuration::{
        DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL,
    };

    // Tests default paths name PNG files
    // Verified by changing the default output extension
    #[test]
    fn test_default_paths() {
        assert_eq!(DEFAULT_INPUT_FILE, "test_org3.png");
        assert_eq!(DEFAULT_OUTPUT_FILE, "45_test_output.png");
        assert_ne!(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE);
    }

    // Tests progress bar width
    // Verified by changing width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }

    // Tests redraw throttling interval is non-zero
    // Verified by setting the interval to zero
    #[test]
    fn test_progress_update_interval() {
        assert_eq!(PROGRESS_UPDATE_INTERVAL, 64);
    }
}
