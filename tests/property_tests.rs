use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use workday_calendar::primitives::{end_of_month, end_of_week, start_of_month, start_of_week};
use workday_calendar::{
    DaysOff, WorkWeek, date_list, days_between, is_workday, offset_by_days, workday_count,
};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. roughly 2200
    (0i64..110_000).prop_map(|n| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(n))
}

fn any_days_off() -> impl Strategy<Value = DaysOff> {
    (0u8..0x7f).prop_map(|mask| {
        DaysOff::from_indices(&(0u8..7).filter(|i| (mask >> *i) & 1 == 1).collect::<Vec<u8>>())
            .unwrap()
    })
}

proptest! {
    #[test]
    fn week_bounds_contain_date(date in any_date()) {
        let start = start_of_week(date);
        let end = end_of_week(date);
        prop_assert!(start <= date && date <= end);
        prop_assert_eq!((end - start).num_days(), 6);
        prop_assert_eq!(start.weekday(), Weekday::Mon);
    }

    #[test]
    fn month_bounds(date in any_date()) {
        prop_assert_eq!(start_of_month(date).day(), 1);
        let end = end_of_month(date);
        prop_assert_eq!(end.month(), date.month());
        prop_assert_eq!((end + Duration::days(1)).day(), 1);
    }

    #[test]
    fn calendar_offset_round_trips(date in any_date(), n in -5_000i64..5_000) {
        let there = offset_by_days(date, n, false).unwrap();
        prop_assert_eq!(offset_by_days(there, -n, false).unwrap(), date);
    }

    #[test]
    fn business_offsets_land_on_workdays(date in any_date(), n in 1i64..200) {
        let target = offset_by_days(date, n, true).unwrap();
        prop_assert!(is_workday(target));
        prop_assert!(target > date);
        prop_assert_eq!(workday_count(date + Duration::days(1), target, 0, DaysOff::WEEKEND), n);
    }

    #[test]
    fn days_between_matches_date_list(date in any_date(), len in 0i64..400) {
        let end = date + Duration::days(len);
        prop_assert_eq!(days_between(date, end, false), len + 1);
        prop_assert_eq!(date_list(date, end).len() as i64, len + 1);
    }

    #[test]
    fn workday_count_matches_enumeration(
        date in any_date(),
        len in 0i64..60,
        days_off in any_days_off(),
    ) {
        let end = date + Duration::days(len);
        let naive = date_list(date, end)
            .into_iter()
            .filter(|day| !days_off.contains(day.weekday()))
            .count() as i64;
        prop_assert_eq!(workday_count(date, end, 0, days_off), naive);
    }

    #[test]
    fn work_week_offsets_invert(date in any_date(), n in 1i64..100, days_off in any_days_off()) {
        let week = WorkWeek::new(days_off, Vec::<NaiveDate>::new()).unwrap();
        let start = week.next_workday(date, true).unwrap();
        let forward = week.add_workdays(start, n).unwrap();
        prop_assert!(week.is_workday(forward));
        prop_assert_eq!(week.add_workdays(forward, -n).unwrap(), start);
    }
}
