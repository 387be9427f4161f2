//! Ordered date and month sequences over inclusive ranges.

use crate::error::CalendarResult;
use crate::format::DatePattern;
use crate::primitives::{first_day_of_next_month, start_of_month};
use chrono::{Duration, Months, NaiveDate};
use std::iter::FusedIterator;

/// Inclusive `[start, end]` range of dates. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.end - self.start).num_days() + 1) as usize
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// A fresh iterator over every day; each call starts from `start` again.
    pub fn iter(&self) -> DateIter {
        DateIter {
            front: self.start,
            back: self.end,
            done: self.is_empty(),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct DateIter {
    front: NaiveDate,
    back: NaiveDate,
    done: bool,
}

impl Iterator for DateIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }
        let current = self.front;
        if current == self.back {
            self.done = true;
        } else {
            self.front = current + Duration::days(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.done {
            0
        } else {
            ((self.back - self.front).num_days() + 1) as usize
        };
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DateIter {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }
        let current = self.back;
        if current == self.front {
            self.done = true;
        } else {
            self.back = current - Duration::days(1);
        }
        Some(current)
    }
}

impl ExactSizeIterator for DateIter {}

impl FusedIterator for DateIter {}

/// Every date in `[start, end]`, ascending.
pub fn date_list(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    DateRange::new(start, end).iter().collect()
}

/// Every date in `[start, end]` rendered with `pattern` (e.g. `YYYY-MM-DD`).
pub fn date_str_list(start: NaiveDate, end: NaiveDate, pattern: &str) -> CalendarResult<Vec<String>> {
    format_dates(start, end, &DatePattern::parse(pattern)?)
}

pub fn format_dates(
    start: NaiveDate,
    end: NaiveDate,
    pattern: &DatePattern,
) -> CalendarResult<Vec<String>> {
    DateRange::new(start, end)
        .iter()
        .map(|date| pattern.format(date))
        .collect()
}

/// First day of each month touched by `[start, end]`.
pub fn months(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let last = start_of_month(end);
    let first = (start <= end).then(|| start_of_month(start));
    std::iter::successors(first, move |month| {
        (*month < last).then(|| first_day_of_next_month(*month))
    })
}

/// One label per month touched by `[start, end]`, rendered with `pattern`
/// (e.g. `YYYY-MM`).
pub fn month_str_list(start: NaiveDate, end: NaiveDate, pattern: &str) -> CalendarResult<Vec<String>> {
    format_months(start, end, &DatePattern::parse(pattern)?)
}

/// The k-th label formats `start` shifted by k months, with the day clamped
/// to the end of shorter months. Termination compares dates, so patterns that
/// do not sort lexicographically (`MM/YYYY`) are fine.
pub fn format_months(
    start: NaiveDate,
    end: NaiveDate,
    pattern: &DatePattern,
) -> CalendarResult<Vec<String>> {
    months(start, end)
        .zip(0u32..)
        .map_while(|(_, k)| start.checked_add_months(Months::new(k)))
        .map(|date| pattern.format(date))
        .collect()
}
