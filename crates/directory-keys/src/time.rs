//! Time utilities.
//!
//! Recovery code expiry times are Unix epoch milliseconds (u64).

/// Return the current time as milliseconds since Unix epoch.
pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Convert milliseconds to an RFC 3339 string.
pub fn millis_to_rfc3339(millis: u64) -> String {
    let dt = i64::try_from(millis)
        .ok()
        .and_then(chrono::DateTime::from_timestamp_millis)
        .unwrap_or(chrono::DateTime::UNIX_EPOCH);
    dt.to_rfc3339()
}
