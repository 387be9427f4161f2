//! Calendar configuration: JSON files, CSV holiday imports, and the
//! patterns used for date and month labels.

use crate::error::{CalendarError, CalendarResult};
use crate::format::DatePattern;
use crate::sequence;
use crate::weekday::DaysOff;
use crate::workday::WorkWeek;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Serializable calendar settings.
///
/// ```json
/// {
///   "days_off": ["Fri", "Sat"],
///   "holidays": ["2024-12-25"],
///   "date_format": "DD/MM/YYYY",
///   "month_format": "MM/YYYY"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default)]
    pub days_off: DaysOff,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    #[serde(default = "DatePattern::date")]
    pub date_format: DatePattern,
    #[serde(default = "DatePattern::month")]
    pub month_format: DatePattern,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_off: DaysOff::WEEKEND,
            holidays: Vec::new(),
            date_format: DatePattern::date(),
            month_format: DatePattern::month(),
        }
    }
}

// other columns, such as `name`, are ignored
#[derive(Deserialize)]
struct HolidayCsvRecord {
    date: String,
}

impl CalendarConfig {
    pub fn from_json_str(json: &str) -> CalendarResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.normalize();
        Ok(config)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut config: Self = serde_json::from_reader(file)?;
        config.normalize();
        log::debug!(
            "loaded calendar config from {}: {} days off, {} holidays",
            path.display(),
            config.days_off.len(),
            config.holidays.len()
        );
        Ok(config)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> CalendarResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        log::debug!("saved calendar config to {}", path.display());
        Ok(())
    }

    /// Merge holidays from a CSV file with a `date` column (`YYYY-MM-DD`)
    /// and an optional `name` column. Returns the number of rows read.
    pub fn load_holidays_csv<P: AsRef<Path>>(&mut self, path: P) -> CalendarResult<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut rows = 0;
        for record in reader.deserialize::<HolidayCsvRecord>() {
            let record = record?;
            self.holidays.push(parse_date(&record.date)?);
            rows += 1;
        }
        self.normalize();
        log::debug!("imported {rows} holidays from {}", path.display());
        Ok(rows)
    }

    /// Every date in `[start, end]` rendered with `date_format`.
    pub fn date_labels(&self, start: NaiveDate, end: NaiveDate) -> CalendarResult<Vec<String>> {
        sequence::format_dates(start, end, &self.date_format)
    }

    /// One label per month in `[start, end]` rendered with `month_format`.
    pub fn month_labels(&self, start: NaiveDate, end: NaiveDate) -> CalendarResult<Vec<String>> {
        sequence::format_months(start, end, &self.month_format)
    }

    pub fn work_week(&self) -> CalendarResult<WorkWeek> {
        WorkWeek::from_config(self)
    }

    fn normalize(&mut self) {
        self.holidays.sort();
        self.holidays.dedup();
    }
}

fn parse_date(input: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidData(format!("invalid date '{input}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = CalendarConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CalendarConfig::from_json_str(r#"{"weekend": ["Sat"]}"#).unwrap_err();
        assert!(matches!(err, CalendarError::Serialization(_)));
    }

    #[test]
    fn bad_pattern_in_config_is_rejected() {
        assert!(CalendarConfig::from_json_str(r#"{"date_format": "YYYY-QQ"}"#).is_err());
    }

    #[test]
    fn parse_date_reports_input() {
        let err = parse_date("2024-02-30").unwrap_err();
        assert!(err.to_string().contains("2024-02-30"));
    }
}
