//! Time and timestamp helpers.
//!
//! Persisted records carry their timestamp as a formatted local wall-clock
//! string, second precision. The format is part of the on-disk and HTTP
//! contract, so it lives here rather than in any adapter.

use chrono::{DateTime, Local};

/// Timestamp format used in every persisted record: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder timestamp reported when a log has no entries yet.
pub const TIMESTAMP_UNAVAILABLE: &str = "N/A";

/// Format a point in time as a record timestamp string.
#[must_use]
pub fn format_timestamp(ts: DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Return the current local wall-clock time as a record timestamp string.
#[must_use]
pub fn now_string() -> String {
    format_timestamp(Local::now())
}
