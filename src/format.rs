//! Output patterns for date and month labels.
//!
//! Two syntaxes are accepted. Patterns containing `%` are chrono strftime
//! patterns. Anything else is a token pattern where `YYYY`, `YY`, `MM` and
//! `DD` are replaced and every non-letter character is copied verbatim.

use crate::error::{CalendarError, CalendarResult};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

const TOKENS: [(&str, &str); 4] = [("YYYY", "%Y"), ("YY", "%y"), ("MM", "%m"), ("DD", "%d")];

/// A validated date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatePattern {
    source: String,
    strftime: String,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> CalendarResult<Self> {
        let strftime = if pattern.contains('%') {
            pattern.to_string()
        } else {
            translate_tokens(pattern)?
        };

        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(CalendarError::format(pattern, "unsupported strftime specifier"));
        }

        Ok(Self {
            source: pattern.to_string(),
            strftime,
        })
    }

    /// `YYYY-MM-DD`
    pub fn date() -> Self {
        Self {
            source: "YYYY-MM-DD".into(),
            strftime: "%Y-%m-%d".into(),
        }
    }

    /// `YYYY-MM`
    pub fn month() -> Self {
        Self {
            source: "YYYY-MM".into(),
            strftime: "%Y-%m".into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render `date`. Specifiers that need a time of day or an offset fail
    /// here rather than at parse time.
    pub fn format(&self, date: NaiveDate) -> CalendarResult<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.strftime)).map_err(|_| {
            CalendarError::format(&self.source, format!("cannot be applied to date {date}"))
        })?;
        Ok(out)
    }
}

fn translate_tokens(pattern: &str) -> CalendarResult<String> {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;

    'outer: while let Some(ch) = rest.chars().next() {
        for (token, spec) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'outer;
            }
        }
        if ch.is_ascii_alphabetic() {
            return Err(CalendarError::format(
                pattern,
                format!("unknown token starting at '{ch}'"),
            ));
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    Ok(out)
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::date()
    }
}

impl FromStr for DatePattern {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DatePattern {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DatePattern> for String {
    fn from(pattern: DatePattern) -> Self {
        pattern.source
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
