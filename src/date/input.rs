//! Date inputs and the parser used to read them
//!
//! Every date helper accepts anything convertible into a [`DateInput`]: a
//! date string, a millisecond timestamp, or a chrono value. Strings are read
//! in local time unless they carry an explicit offset.

use crate::error::{Result, ValidationError};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];
const DATE_TIME_SEPARATORS: [&str; 2] = [" ", "T"];

/// Every `<date><sep><time>` combination, without an offset
static NAIVE_DATETIME_FORMATS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut formats = Vec::new();
    for date in DATE_FORMATS {
        for sep in DATE_TIME_SEPARATORS {
            for time in TIME_FORMATS {
                formats.push(format!("{date}{sep}{time}"));
            }
        }
    }
    formats
});

/// The same combinations followed by a numeric offset, glued or after a space
static OFFSET_DATETIME_FORMATS: Lazy<Vec<String>> = Lazy::new(|| {
    NAIVE_DATETIME_FORMATS
        .iter()
        .flat_map(|format| [format!("{format}%z"), format!("{format} %z")])
        .collect()
});

/// A date-like value accepted by the date helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A date or date-time string such as `2025-01-31` or `2025/01/31 08:00:00`
    Text(String),
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
    /// An already resolved point in time
    DateTime(DateTime<Local>),
}

impl DateInput {
    /// Reject inputs that carry no date at all
    pub fn validate(&self) -> Result<()> {
        match self {
            DateInput::Text(text) if text.is_empty() => Err(ValidationError::EmptyDate),
            _ => Ok(()),
        }
    }

    /// Resolve to a local point in time, or `None` when the value is not a readable date
    pub fn resolve(&self) -> Option<DateTime<Local>> {
        match self {
            DateInput::Text(text) => parse_local(text),
            DateInput::Timestamp(millis) => Local.timestamp_millis_opt(*millis).single(),
            DateInput::DateTime(dt) => Some(*dt),
        }
    }

    /// Validate, then resolve
    pub(crate) fn checked(&self) -> Result<Option<DateTime<Local>>> {
        self.validate()?;
        Ok(self.resolve())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        DateInput::Text(value.clone())
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::DateTime(value.with_timezone(&Local))
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(to_local(value))
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::DateTime(to_local(value.and_time(NaiveTime::MIN)))
    }
}

/// Interpret a wall-clock time in the local timezone
///
/// A time repeated when clocks go back reads as its first occurrence. A time
/// skipped when clocks go forward moves forward past the gap, so `02:30` on a
/// night that jumps from `02:00` to `03:00` reads as `03:30`.
pub(crate) fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| past_gap(naive))
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

fn past_gap(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    let later = naive.checked_add_signed(Duration::try_hours(1)?)?;
    Local.from_local_datetime(&later).earliest()
}

/// Parse a date string into a local point in time
///
/// Accepts `-`, `/` or `.` between date fields, a space or `T` before the
/// time, optional seconds and fractions, and an optional `Z`, `+HH:MM` or
/// `+HHMM` offset. A bare date reads as local midnight.
pub fn parse_local(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local));
    }

    for format in OFFSET_DATETIME_FORMATS.iter() {
        if let Ok(dt) = DateTime::parse_from_str(input, format) {
            return Some(dt.with_timezone(&Local));
        }
    }

    for format in NAIVE_DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(to_local(dt));
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .map(|date| to_local(date.and_time(NaiveTime::MIN)))
}
