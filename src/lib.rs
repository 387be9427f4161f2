//! Workday-aware calendar arithmetic.
//!
//! Day, week and month boundaries, business-day offsets and inclusive day
//! counts, and date / month label sequences over inclusive ranges. Weekdays
//! are numbered 0=Monday through 6=Sunday throughout.

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod format;
pub mod primitives;
pub mod sequence;
pub mod weekday;
pub mod workday;

pub use arithmetic::{days_between, next_workday, offset_by_days, workday_count};
pub use config::CalendarConfig;
pub use error::{CalendarError, CalendarResult};
pub use format::DatePattern;
pub use sequence::{
    DateIter, DateRange, date_list, date_str_list, format_dates, format_months, month_str_list,
    months,
};
pub use weekday::{ALL_WEEKDAYS, DaysOff, weekday_from_index, weekday_index};
pub use workday::{WorkWeek, is_workday};
