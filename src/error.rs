//! Error types for the workday-calendar crate.

use std::io;

/// Error type for every fallible operation in the crate.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A date or month pattern could not be parsed or applied to a date.
    #[error("invalid format pattern '{pattern}': {reason}")]
    Format { pattern: String, reason: String },

    /// An argument outside the domain of the operation, such as a negative
    /// business-day offset or a week with no working days.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration or holiday data that parsed but does not make sense.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl CalendarError {
    pub(crate) fn out_of_range() -> Self {
        Self::InvalidArgument("offset leaves the representable date range".into())
    }

    pub(crate) fn format(pattern: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;
