//! Timestamp value generators.

use chrono::Utc;

/// Current UTC time in milliseconds since the Unix epoch.
///
/// This is NOT deterministic - each call reads the wall clock.
pub fn generate_timestamp_now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn test_timestamp_matches_system_clock() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;
        let ts = generate_timestamp_now_millis();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        assert!(ts >= before && ts <= after, "{before} <= {ts} <= {after}");
    }
}
