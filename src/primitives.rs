//! Day, week and month boundaries.
//!
//! Weeks run Monday through Sunday. Every function takes the reference date
//! explicitly; the `*today*` helpers read the local clock once and delegate.

use crate::error::{CalendarError, CalendarResult};
use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Midnight at the start of the day after `date`.
pub fn start_of_next_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1)
}

pub fn start_of_today() -> NaiveDateTime {
    start_of_day(today())
}

pub fn start_of_tomorrow() -> NaiveDateTime {
    start_of_next_day(today())
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date + Duration::days(1)
}

fn days_since_monday(date: NaiveDate) -> i64 {
    date.weekday().num_days_from_monday() as i64
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(days_since_monday(date))
}

pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - days_since_monday(date))
}

pub fn friday_of_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(4 - days_since_monday(date))
}

/// Midnight on the Monday of `date`'s week.
pub fn start_of_week_at_midnight(date: NaiveDate) -> NaiveDateTime {
    start_of_day(start_of_week(date))
}

pub fn start_of_previous_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) - Duration::days(7)
}

pub fn end_of_previous_week(date: NaiveDate) -> NaiveDate {
    end_of_week(date) - Duration::days(7)
}

/// Friday of the previous week: the last workday of a Monday-Friday week.
pub fn friday_of_previous_week(date: NaiveDate) -> NaiveDate {
    friday_of_week(date) - Duration::days(7)
}

pub fn start_of_next_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(7)
}

pub fn end_of_next_week(date: NaiveDate) -> NaiveDate {
    end_of_week(date) + Duration::days(7)
}

/// False for years outside chrono's date range.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|date| date.leap_year())
}

/// Number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| end_of_month(first).day())
        .ok_or_else(|| {
            CalendarError::InvalidArgument(format!("no month {month} in year {year}"))
        })
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        // only the last representable month has no successor
        .unwrap_or(NaiveDate::MAX)
}

pub fn first_day_of_previous_month(date: NaiveDate) -> NaiveDate {
    start_of_month(start_of_month(date) - Duration::days(1))
}

pub fn first_day_of_next_month(date: NaiveDate) -> NaiveDate {
    end_of_month(date) + Duration::days(1)
}

/// First day of the month before the current one.
pub fn first_day_of_last_month() -> NaiveDate {
    first_day_of_previous_month(today())
}

/// The `n`th (1-based) `weekday` of a month, e.g. the 4th Thursday of November.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let lead = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let date = first + Duration::days((lead + 7 * (n - 1)) as i64);
    (date.month() == month).then_some(date)
}

/// The last `weekday` of a month, e.g. the last Monday of May.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = end_of_month(NaiveDate::from_ymd_opt(year, month, 1)?);
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    Some(last - Duration::days(back as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn days_in_month_rejects_month_thirteen() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert!(days_in_month(2024, 13).is_err());
        assert!(days_in_month(2024, 0).is_err());
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn last_representable_month_ends_at_max() {
        assert_eq!(end_of_month(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(end_of_month(start_of_month(NaiveDate::MAX)), NaiveDate::MAX);
        assert_eq!(days_in_month(NaiveDate::MAX.year(), 12).unwrap(), 31);
    }

    #[test]
    fn nth_weekday_past_month_end_is_none() {
        // February 2023 has four Thursdays
        assert_eq!(
            nth_weekday_of_month(2023, 2, Weekday::Thu, 4),
            Some(d(2023, 2, 23))
        );
        assert_eq!(nth_weekday_of_month(2023, 2, Weekday::Thu, 5), None);
        assert_eq!(nth_weekday_of_month(2023, 2, Weekday::Thu, 0), None);
        // 2024 is a leap year and Feb 29 is the fifth Thursday
        assert_eq!(
            nth_weekday_of_month(2024, 2, Weekday::Thu, 5),
            Some(d(2024, 2, 29))
        );
    }
}
