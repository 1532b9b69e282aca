//! Wall-clock access and epoch/calendar conversion.
//!
//! Timestamps are epoch milliseconds (`i64`) on the wire and in the store;
//! calendar math runs on timezone-naive local datetimes. Conversion between
//! the two happens here, at the boundary, so the engine functions stay
//! timezone-independent and deterministic under test.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

/// One day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Current wall-clock time as epoch milliseconds.
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Epoch milliseconds to local calendar time.
///
/// A UTC instant maps to exactly one local time, so the ambiguous arm is
/// unreachable in practice; out-of-range input falls back to the epoch.
pub fn to_local(ms: i64) -> NaiveDateTime {
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.naive_local(),
        LocalResult::None => DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_ms_is_recent() {
        // Sanity bound: after 2020-01-01, before 2100-01-01.
        let now = now_ms();
        assert!(now > 1_577_836_800_000);
        assert!(now < 4_102_444_800_000);
    }

    #[test]
    fn to_local_round_trips_through_the_local_offset() {
        let ms = 1_700_000_000_000;
        let naive = to_local(ms);
        let back = Local
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.timestamp_millis());
        assert_eq!(back, Some(ms));
    }
}
