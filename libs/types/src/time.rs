//! Timestamp helpers
//!
//! All domain timestamps are Unix nanoseconds as i64.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as Unix nanoseconds.
pub fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_nanos_monotonic_enough() {
        let t1 = now_nanos();
        let t2 = now_nanos();
        assert!(t2 >= t1);
        assert!(t1 > 0);
    }
}
