//! Weekday numbering and non-working weekday sets.
//!
//! Weekdays are numbered 0=Monday through 6=Sunday (ISO 8601). Callers that
//! hold a different convention must translate before building a [`DaysOff`].

use crate::error::{CalendarError, CalendarResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// ISO index of a weekday, 0=Monday.
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// Weekday for an ISO index, 0=Monday.
pub fn weekday_from_index(index: u8) -> CalendarResult<Weekday> {
    ALL_WEEKDAYS
        .get(index as usize)
        .copied()
        .ok_or_else(|| {
            CalendarError::InvalidArgument(format!("weekday index {index} is not in 0..=6"))
        })
}

/// A set of non-working weekdays.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct DaysOff(u8);

impl DaysOff {
    pub const NONE: DaysOff = DaysOff(0);
    /// Saturday and Sunday.
    pub const WEEKEND: DaysOff = DaysOff(0b110_0000);
    /// Friday and Saturday.
    pub const FRIDAY_SATURDAY: DaysOff = DaysOff(0b011_0000);

    const FULL_WEEK: u8 = 0b111_1111;

    pub fn new<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        days.into_iter().fold(Self::NONE, |set, day| set.with(day))
    }

    /// Build from ISO indices (0=Monday). Duplicates are ignored.
    pub fn from_indices(indices: &[u8]) -> CalendarResult<Self> {
        let mut set = Self::NONE;
        for &index in indices {
            set = set.with(weekday_from_index(index)?);
        }
        Ok(set)
    }

    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | Self::bit(day))
    }

    pub fn without(self, day: Weekday) -> Self {
        Self(self.0 & !Self::bit(day))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when no weekday is left to work on.
    pub fn is_full_week(&self) -> bool {
        self.0 == Self::FULL_WEEK
    }

    /// Weekdays in this set, Monday first.
    pub fn days(&self) -> Vec<Weekday> {
        ALL_WEEKDAYS
            .iter()
            .copied()
            .filter(|day| self.contains(*day))
            .collect()
    }

    /// Weekdays not in this set, Monday first.
    pub fn working_days(&self) -> Vec<Weekday> {
        ALL_WEEKDAYS
            .iter()
            .copied()
            .filter(|day| !self.contains(*day))
            .collect()
    }

    /// Complement of a working-day list.
    pub fn from_working_days<I>(working: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let working = Self::new(working);
        Self(!working.0 & Self::FULL_WEEK)
    }

    /// ISO indices of the days off, ascending.
    pub fn indices(&self) -> Vec<u8> {
        self.days().into_iter().map(weekday_index).collect()
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }
}

impl Default for DaysOff {
    fn default() -> Self {
        Self::WEEKEND
    }
}

impl fmt::Debug for DaysOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.days()).finish()
    }
}

impl From<Vec<Weekday>> for DaysOff {
    fn from(days: Vec<Weekday>) -> Self {
        Self::new(days)
    }
}

impl From<DaysOff> for Vec<Weekday> {
    fn from(days_off: DaysOff) -> Self {
        days_off.days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_is_saturday_and_sunday() {
        assert_eq!(DaysOff::WEEKEND.days(), vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(DaysOff::WEEKEND.indices(), vec![5, 6]);
        assert_eq!(DaysOff::default(), DaysOff::WEEKEND);
    }

    #[test]
    fn friday_saturday_constant_matches_indices() {
        assert_eq!(DaysOff::from_indices(&[4, 5]).unwrap(), DaysOff::FRIDAY_SATURDAY);
    }

    #[test]
    fn index_out_of_range_is_rejected() {
        assert!(matches!(
            DaysOff::from_indices(&[7]),
            Err(CalendarError::InvalidArgument(_))
        ));
    }

    #[test]
    fn working_days_complement() {
        let off = DaysOff::from_working_days([Weekday::Mon, Weekday::Tue]);
        assert_eq!(off.len(), 5);
        assert_eq!(off.working_days(), vec![Weekday::Mon, Weekday::Tue]);
        assert!(DaysOff::from_working_days([]).is_full_week());
    }

    #[test]
    fn serializes_as_weekday_names() {
        let json = serde_json::to_string(&DaysOff::WEEKEND).unwrap();
        assert_eq!(json, r#"["Sat","Sun"]"#);
        let back: DaysOff = serde_json::from_str(r#"["Fri","Sat","Fri"]"#).unwrap();
        assert_eq!(back, DaysOff::FRIDAY_SATURDAY);
    }
}
