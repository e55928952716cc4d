//! Calendar-range resolution anchored to Asia/Seoul.
//!
//! Pure functions over `NaiveDate`; "now" is resolved once per request via
//! `today_seoul` and threaded through so the math stays deterministic.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Asia::Seoul;

use crate::domain::DateRange;

/// Current date in Asia/Seoul.
pub fn today_seoul() -> NaiveDate {
    Utc::now().with_timezone(&Seoul).date_naive()
}

/// Monday–Sunday week containing `today`, shifted by `offset_weeks`.
///
/// Offset 0 is the current week, 1 the following week; no upper bound.
pub fn week_range(today: NaiveDate, offset_weeks: i64) -> DateRange {
    let weekday = i64::from(today.weekday().num_days_from_monday());
    let monday = today - Duration::days(weekday) + Duration::days(offset_weeks * 7);
    DateRange {
        start: monday,
        end: monday + Duration::days(6),
    }
}

/// First through last day of the month containing `today` (leap-year aware).
pub fn month_range(today: NaiveDate) -> DateRange {
    let first = today.with_day(1).unwrap_or(today);
    let next_first = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last = next_first
        .map(|d| d - Duration::days(1))
        .unwrap_or(today);
    DateRange {
        start: first,
        end: last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_range_contains_anchor_and_is_monday_to_sunday() {
        // A Wednesday, a Monday, and a Sunday
        for today in [date(2024, 3, 6), date(2024, 3, 4), date(2024, 3, 10)] {
            let range = week_range(today, 0);
            assert!(range.contains(today));
            assert_eq!(range.start.weekday(), Weekday::Mon);
            assert_eq!(range.end.weekday(), Weekday::Sun);
            assert_eq!(range.end - range.start, Duration::days(6));
        }
    }

    #[test]
    fn test_next_week_immediately_follows_current_week() {
        let today = date(2024, 3, 6);
        let current = week_range(today, 0);
        let next = week_range(today, 1);
        assert_eq!(next.start, current.end + Duration::days(1));
        assert_eq!(current.start, date(2024, 3, 4));
        assert_eq!(next.end, date(2024, 3, 17));
    }

    #[test]
    fn test_month_range_leap_february() {
        let range = month_range(date(2024, 2, 15));
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_month_range_thirty_day_month() {
        let range = month_range(date(2025, 4, 1));
        assert_eq!(range.start, date(2025, 4, 1));
        assert_eq!(range.end, date(2025, 4, 30));
    }

    #[test]
    fn test_month_range_december_rolls_into_next_year() {
        let range = month_range(date(2024, 12, 31));
        assert_eq!(range.start, date(2024, 12, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }
}
