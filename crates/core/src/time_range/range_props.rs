//! Property-based tests for time range validation and containment.

use chrono::{DateTime, Utc};
use coffer_shared::types::Timestamp;
use proptest::prelude::*;

use super::error::TimeRangeError;
use super::range::TimeRange;

/// Strategy to generate a timestamp between 1900 and 2100.
fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (-2_208_988_800i64..4_102_444_800i64, 0u32..1_000_000_000u32)
        .prop_map(|(secs, nanos)| DateTime::<Utc>::from_timestamp(secs, nanos).unwrap())
}

/// Strategy to generate an optional boundary.
fn boundary_strategy() -> impl Strategy<Value = Option<Timestamp>> {
    prop::option::of(timestamp_strategy())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Validation fails exactly when both ends are present and end < start.
    #[test]
    fn prop_validate_end_before_start(
        start in boundary_strategy(),
        end in boundary_strategy(),
    ) {
        let range = TimeRange::new(start, end);
        let expected = match (start, end) {
            (Some(s), Some(e)) if e < s => Err(TimeRangeError::EndBeforeStart),
            _ => Ok(()),
        };
        prop_assert_eq!(range.validate(), expected);
    }

    /// Containment is start-inclusive and end-exclusive.
    #[test]
    fn prop_contains_half_open(
        start in boundary_strategy(),
        end in boundary_strategy(),
        time in timestamp_strategy(),
    ) {
        let range = TimeRange::new(start, end);
        let before_start = start.is_some_and(|s| time < s);
        let at_or_after_end = end.is_some_and(|e| time >= e);
        prop_assert_eq!(range.contains(time), !before_start && !at_or_after_end);
    }

    /// A range always contains its own start unless the end is at or before it.
    #[test]
    fn prop_contains_own_start(start in timestamp_strategy(), end in boundary_strategy()) {
        let range = TimeRange::new(Some(start), end);
        prop_assert_eq!(range.contains(start), end.is_none_or(|e| start < e));
    }

    /// A range never contains its own end.
    #[test]
    fn prop_never_contains_own_end(start in boundary_strategy(), end in timestamp_strategy()) {
        let range = TimeRange::new(start, Some(end));
        prop_assert!(!range.contains(end));
    }
}
