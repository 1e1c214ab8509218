use chrono::{DateTime, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as an RFC 3339 string in UTC.
///
/// Out-of-range values fall back to the Unix epoch.
pub fn timestamp_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339()
}
