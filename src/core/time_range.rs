use std::fmt::{Debug, Formatter};

use crate::core::clock_time::{ClockTime, MINUTES_PER_DAY};

/// Time-of-day span between two announced start times.
///
/// `start > end` is a valid shape: such a span crosses midnight. `start ==
/// end` is the degenerate span containing only that single instant.
#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct TimeRange {
    /// Inclusive.
    pub start: ClockTime,

    /// Inclusive.
    pub end: ClockTime,
}

impl Debug for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl TimeRange {
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Move both endpoints by the signed number of minutes, each wrapping
    /// around midnight independently.
    pub fn shift(self, minutes: i32) -> Self {
        Self::new(self.start.add(minutes), self.end.add(minutes))
    }

    /// Boundary-inclusive containment covering all three span shapes with a
    /// single comparison: the distance from `start` to `time` must not exceed
    /// the distance from `start` to `end`, both measured forward along the
    /// 24-hour ring.
    #[must_use]
    pub fn contains(self, time: ClockTime) -> bool {
        let span = (self.end.minutes_since_midnight() - self.start.minutes_since_midnight())
            .rem_euclid(MINUTES_PER_DAY);
        let elapsed = (time.minutes_since_midnight() - self.start.minutes_since_midnight())
            .rem_euclid(MINUTES_PER_DAY);
        elapsed <= span
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::prelude::Result;

    #[test]
    fn test_contains_same_day_span() -> Result {
        let range = TimeRange::new("10:00".parse()?, "11:00".parse()?);
        assert!(range.contains("10:00".parse()?));
        assert!(range.contains("10:30".parse()?));
        assert!(range.contains("11:00".parse()?));
        assert!(!range.contains("09:59".parse()?));
        assert!(!range.contains("11:01".parse()?));
        Ok(())
    }

    #[test]
    fn test_contains_span_crossing_midnight() -> Result {
        let range = TimeRange::new("23:30".parse()?, "10:00".parse()?);
        assert!(range.contains("23:30".parse()?));
        assert!(range.contains("23:45".parse()?));
        assert!(range.contains("00:00".parse()?));
        assert!(range.contains("10:00".parse()?));
        assert!(!range.contains("10:01".parse()?));
        assert!(!range.contains("23:29".parse()?));
        Ok(())
    }

    #[test]
    fn test_contains_degenerate_span() -> Result {
        let range = TimeRange::new("12:00".parse()?, "12:00".parse()?);
        assert!(range.contains("12:00".parse()?));
        assert!(!range.contains("12:01".parse()?));
        assert!(!range.contains("11:59".parse()?));
        Ok(())
    }

    #[test]
    fn test_shift_moves_both_endpoints() -> Result {
        let range = TimeRange::new("23:30".parse()?, "10:00".parse()?);
        assert_eq!(range.shift(60), TimeRange::new("00:30".parse()?, "11:00".parse()?));
        assert_eq!(range.shift(120).shift(-120), range);
        Ok(())
    }

    proptest! {
        #[test]
        fn both_boundaries_are_contained(
            start_hour in 0u8..24,
            start_minute in 0u8..60,
            end_hour in 0u8..24,
            end_minute in 0u8..60,
        ) {
            let range = TimeRange::new(
                ClockTime::from_hm(start_hour, start_minute),
                ClockTime::from_hm(end_hour, end_minute),
            );
            prop_assert!(range.contains(range.start));
            prop_assert!(range.contains(range.end));
        }
    }
}
