//! Progress logging utilities.

use log::info;

/// Logs which URL is about to be attempted.
///
/// Operator visibility only. `index` is 1-based; both numbers are zero-padded
/// to four digits so long runs line up.
///
/// # Arguments
///
/// * `index` - Position of this URL among the unique URLs (1-based)
/// * `total` - Number of unique URLs in the run
/// * `url` - The normalized URL
pub fn log_progress(index: usize, total: usize, url: &str) {
    info!("{}", progress_line(index, total, url));
}

fn progress_line(index: usize, total: usize, url: &str) -> String {
    format!("processing [{index:0>4} out of {total:0>4}]: {url}")
}

#[cfg(test)]
mod tests {
    use super::progress_line;

    #[test]
    fn test_progress_line_is_zero_padded() {
        assert_eq!(
            progress_line(7, 120, "http://example.com"),
            "processing [0007 out of 0120]: http://example.com"
        );
    }

    #[test]
    fn test_progress_line_wider_than_padding() {
        assert_eq!(
            progress_line(12345, 12345, "http://a.test"),
            "processing [12345 out of 12345]: http://a.test"
        );
    }
}
