//! Timestamp value generators.

use crate::document::FieldValue;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Generate the current UTC time as nanoseconds since the Unix epoch.
///
/// This is NOT deterministic - each call returns the current time.
pub fn generate_now_nanos() -> FieldValue {
    // saturates past 2262-04-11
    FieldValue::Int64(Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX))
}

/// Generate a random calendar timestamp between the Unix epoch and now.
pub fn generate_random_timestamp<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    generate_timestamp_between(rng, DateTime::<Utc>::UNIX_EPOCH, Utc::now())
}

/// Generate a random timestamp in `[start, end]` with second resolution.
pub fn generate_timestamp_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> FieldValue {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return FieldValue::DateTime(start);
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    let dt = DateTime::from_timestamp(random_ts, 0).unwrap_or(start);
    FieldValue::DateTime(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_now_nanos_is_recent() {
        let before = Utc::now().timestamp_nanos_opt().unwrap();
        let FieldValue::Int64(nanos) = generate_now_nanos() else {
            panic!("Expected Int64 value");
        };
        let after = Utc::now().timestamp_nanos_opt().unwrap();
        assert!(before <= nanos && nanos <= after);
    }

    #[test]
    fn test_generate_timestamp_between() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        for _ in 0..100 {
            if let FieldValue::DateTime(dt) = generate_timestamp_between(&mut rng, start, end) {
                assert!(dt.year() >= 2020 && dt.year() <= 2024);
            } else {
                panic!("Expected DateTime value");
            }
        }
    }

    #[test]
    fn test_inverted_range_returns_start() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(
            generate_timestamp_between(&mut rng, start, end),
            FieldValue::DateTime(start)
        );
    }

    #[test]
    fn test_random_timestamp_not_in_future() {
        let mut rng = StdRng::seed_from_u64(7);
        let FieldValue::DateTime(dt) = generate_random_timestamp(&mut rng) else {
            panic!("Expected DateTime value");
        };
        assert!(dt <= Utc::now());
        assert!(dt >= DateTime::<Utc>::UNIX_EPOCH);
    }
}
