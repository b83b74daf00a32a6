//! Calendar-month arithmetic and bucketing.
//!
//! Month stepping uses chrono's [`Months`] increment — exact calendar months
//! with end-of-month clamping — never day-count approximation. The
//! "day 28 plus 4 days, truncate" trick drifts; it is deliberately absent.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};

use crate::error::ReportError;

/// Advance a date by exactly `months` calendar months.
///
/// Day-of-month is preserved where valid and clamped to the last valid day
/// of the target month otherwise (Jan 31 + 1 month → Feb 28/29, not Mar 3).
/// Saturates at the calendar horizon, which no report range reaches.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Step a date back by exactly `months` calendar months, with the same
/// end-of-month clamping as [`add_months`].
#[must_use]
pub fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Midnight UTC at the start of `date`.
#[must_use]
pub fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Lazy, finite, restartable sequence of `[bucket_start, bucket_end)` month
/// windows covering `[start, end)`.
///
/// The first bucket starts at the first day of the month containing `start`;
/// each subsequent boundary is the first day of the next calendar month.
/// Cloning restarts the sequence from the beginning.
#[derive(Debug, Clone)]
pub struct MonthBuckets {
    cursor: NaiveDate,
    end: DateTime<Utc>,
    exhausted: bool,
}

impl MonthBuckets {
    /// Build the bucket sequence for `[start, end)`.
    ///
    /// An empty range (`start == end`) yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidRange`] when `end` is before `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ReportError> {
        if end < start {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self {
            cursor: month_floor(start.date_naive()),
            end,
            exhausted: start == end,
        })
    }
}

impl Iterator for MonthBuckets {
    type Item = (DateTime<Utc>, DateTime<Utc>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let bucket_start = at_midnight(self.cursor);
        if bucket_start >= self.end {
            self.exhausted = true;
            return None;
        }
        let next = add_months(self.cursor, 1);
        self.cursor = next;
        Some((bucket_start, at_midnight(next)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2026, 1, 31), 1, date(2026, 2, 28))]
    #[case(date(2024, 1, 31), 1, date(2024, 2, 29))]
    #[case(date(2026, 1, 15), 1, date(2026, 2, 15))]
    #[case(date(2026, 1, 31), 2, date(2026, 3, 31))]
    #[case(date(2026, 3, 31), 1, date(2026, 4, 30))]
    #[case(date(2026, 10, 31), 4, date(2027, 2, 28))]
    #[case(date(2026, 12, 1), 1, date(2027, 1, 1))]
    fn add_months_clamps_to_month_end(
        #[case] start: NaiveDate,
        #[case] months: u32,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(add_months(start, months), expected);
    }

    #[rstest]
    #[case(date(2026, 3, 31), 1, date(2026, 2, 28))]
    #[case(date(2026, 3, 15), 2, date(2026, 1, 15))]
    #[case(date(2026, 1, 10), 1, date(2025, 12, 10))]
    fn sub_months_clamps_to_month_end(
        #[case] start: NaiveDate,
        #[case] months: u32,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(sub_months(start, months), expected);
    }

    #[test]
    fn month_floor_returns_first_day() {
        assert_eq!(month_floor(date(2026, 2, 28)), date(2026, 2, 1));
        assert_eq!(month_floor(date(2026, 2, 1)), date(2026, 2, 1));
    }

    #[test]
    fn buckets_span_jan_through_mar() {
        // Range length in days is irrelevant: Jan 31 .. Mar 5 covers three
        // calendar months.
        let start = at_midnight(date(2026, 1, 31));
        let end = at_midnight(date(2026, 3, 5));
        let buckets: Vec<_> = MonthBuckets::new(start, end).unwrap().collect();

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].0, at_midnight(date(2026, 1, 1)));
        assert_eq!(buckets[0].1, at_midnight(date(2026, 2, 1)));
        assert_eq!(buckets[1].0, at_midnight(date(2026, 2, 1)));
        assert_eq!(buckets[1].1, at_midnight(date(2026, 3, 1)));
        assert_eq!(buckets[2].0, at_midnight(date(2026, 3, 1)));
        assert_eq!(buckets[2].1, at_midnight(date(2026, 4, 1)));
    }

    #[test]
    fn buckets_are_contiguous_over_a_year() {
        let start = at_midnight(date(2025, 8, 5));
        let end = at_midnight(date(2026, 8, 5));
        let buckets: Vec<_> = MonthBuckets::new(start, end).unwrap().collect();

        assert_eq!(buckets.len(), 13);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn empty_range_yields_no_buckets() {
        let point = at_midnight(date(2026, 1, 15));
        let mut buckets = MonthBuckets::new(point, point).unwrap();
        assert_eq!(buckets.next(), None);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let start = at_midnight(date(2026, 3, 1));
        let end = at_midnight(date(2026, 1, 1));
        let err = MonthBuckets::new(start, end).unwrap_err();
        assert!(matches!(err, ReportError::InvalidRange { .. }));
    }

    #[test]
    fn clone_restarts_the_sequence() {
        let start = at_midnight(date(2026, 1, 10));
        let end = at_midnight(date(2026, 4, 10));
        let mut first = MonthBuckets::new(start, end).unwrap();
        let restart = first.clone();

        first.next();
        first.next();
        assert_eq!(restart.count(), 4);
    }
}
