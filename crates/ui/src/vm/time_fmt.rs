use chrono::{DateTime, Utc};

/// Formats a comment timestamp the way the directory displays it,
/// e.g. "May 01, 2023".
#[must_use]
pub fn format_comment_date(value: DateTime<Utc>) -> String {
    value.format("%b %d, %Y").to_string()
}
