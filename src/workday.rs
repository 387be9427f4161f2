//! Workday predicates: the fixed Monday-Friday week and a configurable
//! [`WorkWeek`] with its own days off and holiday dates.

use crate::config::CalendarConfig;
use crate::error::{CalendarError, CalendarResult};
use crate::primitives::nth_weekday_of_month;
use crate::weekday::DaysOff;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Monday through Friday are workdays; Saturday and Sunday are not.
///
/// This predicate is fixed. Use [`WorkWeek`] for other weekends or holidays.
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A workday calendar with configurable days off and holiday dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkWeek {
    days_off: DaysOff,
    holidays: BTreeSet<NaiveDate>,
}

impl Default for WorkWeek {
    fn default() -> Self {
        Self {
            days_off: DaysOff::WEEKEND,
            holidays: BTreeSet::new(),
        }
    }
}

impl WorkWeek {
    pub fn new<I>(days_off: DaysOff, holidays: I) -> CalendarResult<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        if days_off.is_full_week() {
            return Err(CalendarError::InvalidArgument(
                "a work week needs at least one working day".into(),
            ));
        }
        Ok(Self {
            days_off,
            holidays: holidays.into_iter().collect(),
        })
    }

    pub fn from_config(config: &CalendarConfig) -> CalendarResult<Self> {
        Self::new(config.days_off, config.holidays.iter().copied())
    }

    /// Config carrying this week's days off and holidays, with default patterns.
    pub fn to_config(&self) -> CalendarConfig {
        CalendarConfig {
            days_off: self.days_off,
            holidays: self.holidays.iter().copied().collect(),
            ..CalendarConfig::default()
        }
    }

    pub fn days_off(&self) -> DaysOff {
        self.days_off
    }

    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    pub fn add_holidays(&mut self, dates: &[NaiveDate]) {
        self.holidays.extend(dates);
    }

    /// Add the same month/day for every year in the range.
    /// Years where the date does not exist (Feb 29) are skipped.
    pub fn add_recurring_holiday(&mut self, month: u32, day: u32, start_year: i32, end_year: i32) {
        for year in start_year..=end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.holidays.insert(date);
            }
        }
    }

    /// Add a floating holiday such as "4th Thursday of November" for a range of years.
    pub fn add_nth_weekday_holiday(
        &mut self,
        month: u32,
        weekday: Weekday,
        n: u32,
        start_year: i32,
        end_year: i32,
    ) {
        for year in start_year..=end_year {
            if let Some(date) = nth_weekday_of_month(year, month, weekday, n) {
                self.holidays.insert(date);
            }
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_workday(&self, date: NaiveDate) -> bool {
        !self.days_off.contains(date.weekday()) && !self.holidays.contains(&date)
    }

    /// First workday after `from`, or `from` itself when `include_start` is set
    /// and it is a workday.
    pub fn next_workday(&self, from: NaiveDate, include_start: bool) -> CalendarResult<NaiveDate> {
        if include_start && self.is_workday(from) {
            return Ok(from);
        }
        self.add_workdays(from, 1)
    }

    pub fn previous_workday(&self, from: NaiveDate) -> CalendarResult<NaiveDate> {
        self.add_workdays(from, -1)
    }

    /// Move `n` workdays away from `from`, backwards when `n` is negative.
    /// `from` itself is never counted. Walking past chrono's date range is an
    /// `InvalidArgument` error.
    pub fn add_workdays(&self, from: NaiveDate, n: i64) -> CalendarResult<NaiveDate> {
        let step = Duration::days(n.signum());
        let mut remaining = n.unsigned_abs();

        let room = if n < 0 {
            from - NaiveDate::MIN
        } else {
            NaiveDate::MAX - from
        };
        if (room.num_days() as u64) < remaining {
            return Err(CalendarError::out_of_range());
        }

        let mut current = from;
        while remaining > 0 {
            current = current
                .checked_add_signed(step)
                .ok_or_else(CalendarError::out_of_range)?;
            if self.is_workday(current) {
                remaining -= 1;
            }
        }
        log::trace!("{from} + {n} workdays -> {current}");
        Ok(current)
    }

    pub fn workdays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| self.is_workday(*day))
            .collect()
    }

    /// Workdays in `[start, end]`, holidays excluded. Zero for an inverted range.
    pub fn count_workdays(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if start > end {
            return 0;
        }
        let holidays = self
            .holidays
            .range(start..=end)
            .filter(|day| !self.days_off.contains(day.weekday()))
            .count() as i64;
        crate::arithmetic::workday_count(start, end, 0, self.days_off) - holidays
    }
}
