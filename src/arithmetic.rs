//! Calendar and business-day offsets and inclusive day counts.

use crate::error::{CalendarError, CalendarResult};
use crate::weekday::DaysOff;
use crate::workday::is_workday;
use chrono::{Datelike, Duration, NaiveDate};

/// Shift `start` by `n` days.
///
/// With `business_days_only` the walk moves forward one day at a time and
/// only counts Monday-Friday; `start` itself is not counted. Negative `n` is
/// rejected in that mode, and `n == 0` returns `start` unchanged. Results
/// past chrono's date range are `InvalidArgument` errors.
pub fn offset_by_days(
    start: NaiveDate,
    n: i64,
    business_days_only: bool,
) -> CalendarResult<NaiveDate> {
    if !business_days_only {
        return Duration::try_days(n)
            .and_then(|delta| start.checked_add_signed(delta))
            .ok_or_else(CalendarError::out_of_range);
    }
    if n < 0 {
        return Err(CalendarError::InvalidArgument(format!(
            "business-day offset must not be negative, got {n}"
        )));
    }
    // every business day needs at least one calendar day
    if (NaiveDate::MAX - start).num_days() < n {
        return Err(CalendarError::out_of_range());
    }

    let mut current = start;
    let mut remaining = n;
    while remaining > 0 {
        current = current.succ_opt().ok_or_else(CalendarError::out_of_range)?;
        if is_workday(current) {
            remaining -= 1;
        }
    }
    log::trace!("{start} + {n} business days -> {current}");
    Ok(current)
}

/// Next Monday-Friday date after `start`, or `start` when `include_start` is
/// set and it is already a workday.
pub fn next_workday(start: NaiveDate, include_start: bool) -> NaiveDate {
    if include_start && is_workday(start) {
        return start;
    }
    // a weekend is at most two days long
    let mut current = start + Duration::days(1);
    while !is_workday(current) {
        current = current + Duration::days(1);
    }
    current
}

/// Inclusive number of days from `start` to `end`.
///
/// Not validated: an inverted range gives a non-positive calendar count, and
/// zero in business-day mode.
pub fn days_between(start: NaiveDate, end: NaiveDate, business_days_only: bool) -> i64 {
    if business_days_only {
        workday_count(start, end, 0, DaysOff::WEEKEND)
    } else {
        (end - start).num_days() + 1
    }
}

/// Dates in `[start, end]` whose weekday is not in `days_off`, minus `holidays`.
///
/// Whole weeks contribute `7 - days_off.len()` each; the remaining partial
/// week (at most six days) is checked day by day.
pub fn workday_count(start: NaiveDate, end: NaiveDate, holidays: i64, days_off: DaysOff) -> i64 {
    let span = if start > end {
        0
    } else {
        (end - start).num_days() + 1
    };

    let full_weeks = span / 7;
    let per_week = 7 - days_off.len() as i64;
    let tail_start = start + Duration::days(full_weeks * 7);
    let tail = (0..span % 7)
        .map(|offset| tail_start + Duration::days(offset))
        .filter(|day| !days_off.contains(day.weekday()))
        .count() as i64;

    let count = full_weeks * per_week + tail - holidays;
    if count < 0 {
        log::warn!(
            "workday count for {start}..={end} is negative ({count}); {holidays} holidays exceed the workdays in range"
        );
    }
    count
}
