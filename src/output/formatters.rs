//! Formatting utilities for terminal output

use std::time::Duration;

/// Format a wall-clock duration as whole minutes and seconds
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordle_tree::output::formatters::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs(125)), "2m 5s");
/// ```
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Create a histogram bar scaled so that `max` fills `width`
///
/// Any non-zero count gets at least one block.
#[must_use]
pub fn depth_bar(count: usize, max: usize, width: usize) -> (String, String) {
    let filled = if max == 0 {
        0
    } else {
        (count * width / max).max(usize::from(count > 0)).min(width)
    };

    ("█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
