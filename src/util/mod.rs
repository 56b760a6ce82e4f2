//! Small utility helpers for lenient numeric parsing, date formatting, and
//! cell truncation.
//!
//! The functions in this module are intentionally lightweight. They are used
//! by the engine refresh, the event layer, and UI code.

pub mod config;

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// What: Parse the minimum-experience text box leniently.
///
/// Inputs:
/// - `input`: Raw text as typed by the user
///
/// Output:
/// - `Some(bound)` for a non-negative integer; `None` for empty, malformed,
///   or negative input.
///
/// Details:
/// - Malformed input deactivates the bound rather than raising an error;
///   an empty result set is the worst possible outcome of a bad value.
#[must_use]
pub fn parse_min_experience(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

/// What: Format a registration timestamp for table display.
///
/// Inputs:
/// - `ts`: UTC timestamp from the dataset
///
/// Output:
/// - Short human-readable date, e.g. "01 Jun 2024".
#[must_use]
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d %b %Y").to_string()
}

/// What: Truncate a string to a display width, appending an ellipsis.
///
/// Inputs:
/// - `s`: Source text
/// - `max_width`: Maximum display width in terminal cells
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix plus `…` whose total
///   display width does not exceed `max_width`.
///
/// Details:
/// - Width is measured in terminal cells (wide characters count as two).
#[must_use]
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
