//! Date formatting and calendar arithmetic
//!
//! The helpers come in two flavours: free functions that read the host clock,
//! and [`DateTools`], which carries its own [`Clock`] and relative-time
//! [`Language`] so callers (and tests) can pin "now".
//!
//! Every helper that takes a date validates it first and returns
//! [`ValidationError::EmptyDate`](crate::error::ValidationError::EmptyDate)
//! for an empty string. Past that point nothing fails: a string that is not a
//! date renders as `"Invalid Date"`.
//!
//! ```ignore
//! use daykit::date;
//!
//! assert_eq!(date::start_of_day("2025-01-31", "yyyy/MM/dd", 2)?, "2025/02/02");
//! assert_eq!(date::start_of_week(Some("2025-01-31".into()), "yyyy/MM/dd", 0)?, "2025/01/27");
//! ```

pub mod clock;
pub mod format;
pub mod input;
pub mod range;
pub mod relative;

pub use clock::{Clock, FixedClock, SystemClock};
pub use input::{parse_local, DateInput};
pub use relative::{Elapsed, Language};

use crate::config::DateConfig;
use crate::constants::{
    DAY_MS, DEFAULT_DATETIME_PATTERN, DEFAULT_DAY_PATTERN, DEFAULT_SEPARATOR, HOUR_MS, MINUTE_MS, SECOND_MS,
};
use crate::error::{Result, ValidationError};
use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+(\d{2})(\d{2})$").expect("valid offset regex"));

/// Replace `separator` with `/` so the string reads as a slash-separated date
///
/// A trailing `+HHMM` offset is rewritten to `+HH:MM`. When the rewritten
/// string is not a readable date the original input comes back untouched.
pub fn normalize_separators(date: &str, separator: &str) -> Result<String> {
    if date.is_empty() {
        return Err(ValidationError::EmptyDate);
    }

    let fixed = if separator.is_empty() {
        date.to_string()
    } else {
        date.replace(separator, "/")
    };

    if parse_local(&fixed).is_none() {
        log::debug!("'{}' is not a readable date, keeping it as is", fixed);
        return Ok(date.to_string());
    }

    Ok(TRAILING_OFFSET.replace(&fixed, "+$1:$2").into_owned())
}

/// Date helpers bound to a clock, a label language and default patterns
#[derive(Debug, Clone)]
pub struct DateTools<C: Clock = SystemClock> {
    clock: C,
    language: Language,
    pattern: String,
    day_pattern: String,
    separator: String,
}

impl<C: Clock + Default> Default for DateTools<C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl DateTools<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[date]` configuration section
    pub fn from_config(config: &DateConfig) -> Self {
        Self::new().with_config(config)
    }
}

impl<C: Clock> DateTools<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            language: Language::default(),
            pattern: DEFAULT_DATETIME_PATTERN.to_string(),
            day_pattern: DEFAULT_DAY_PATTERN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Take the language, patterns and separator from a `[date]` section
    #[must_use]
    pub fn with_config(mut self, config: &DateConfig) -> Self {
        self.language = config.language;
        self.pattern = config.pattern.clone();
        self.day_pattern = config.day_pattern.clone();
        self.separator = config.separator.clone();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Pattern used by [`format_default`](Self::format_default)
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Date-only pattern used by [`today_default`](Self::today_default)
    pub fn day_pattern(&self) -> &str {
        &self.day_pattern
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// [`normalize_separators`] with the configured separator
    pub fn normalize(&self, date: &str) -> Result<String> {
        normalize_separators(date, &self.separator)
    }

    /// [`format`](Self::format) with the configured pattern
    pub fn format_default(&self, date: impl Into<DateInput>) -> Result<String> {
        self.format(date, &self.pattern)
    }

    /// [`today`](Self::today) with the configured date-only pattern
    pub fn today_default(&self) -> String {
        self.today(&self.day_pattern)
    }

    /// Format `date` with a token pattern such as `yyyy/MM/dd HH:mm:ss`
    pub fn format(&self, date: impl Into<DateInput>, pattern: &str) -> Result<String> {
        let resolved = date.into().checked()?;
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// Describe `date` relative to now: "just now", "5 minutes ago", "yesterday", ...
    pub fn relative(&self, date: impl Into<DateInput>) -> Result<String> {
        let span = date
            .into()
            .checked()?
            .map(|then| (self.now() - then).num_milliseconds())
            .unwrap_or(0);
        Ok(relative::describe_span(span, self.language))
    }

    /// Local midnight of the current day
    pub fn today(&self, pattern: &str) -> String {
        format::render(&self.midnight_today(), pattern)
    }

    /// Local midnight of `date`, moved by `day_offset` days
    pub fn start_of_day(&self, date: impl Into<DateInput>, pattern: &str, day_offset: i64) -> Result<String> {
        let resolved = date
            .into()
            .checked()?
            .and_then(|dt| range::shift_days(&range::start_of_day(&dt), day_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// Local 23:59:59 of `date`, moved by `day_offset` days
    pub fn end_of_day(&self, date: impl Into<DateInput>, pattern: &str, day_offset: i64) -> Result<String> {
        let resolved = date
            .into()
            .checked()?
            .and_then(|dt| range::end_of_day(&dt))
            .and_then(|dt| range::shift_days(&dt, day_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// Monday of the week of `date` (today when `None`), moved by `week_offset` weeks
    pub fn start_of_week(&self, date: Option<DateInput>, pattern: &str, week_offset: i64) -> Result<String> {
        let resolved = self.day_start_anchor(date)?.and_then(|dt| monday_shifted(&dt, week_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// Anchored on the end of `date` (today when `None`) but, like
    /// [`start_of_week`](Self::start_of_week), lands on the week's Monday.
    pub fn end_of_week(&self, date: Option<DateInput>, pattern: &str, week_offset: i64) -> Result<String> {
        let resolved = self.day_end_anchor(date)?.and_then(|dt| monday_shifted(&dt, week_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// First day of the month of `date` (today when `None`), `month_offset` months away
    pub fn start_of_month(&self, date: Option<DateInput>, pattern: &str, month_offset: i32) -> Result<String> {
        let resolved = self
            .day_start_anchor(date)?
            .and_then(|dt| range::first_of_month(&dt, month_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// Last day of the month of `date` (today when `None`), `month_offset` months away
    pub fn end_of_month(&self, date: Option<DateInput>, pattern: &str, month_offset: i32) -> Result<String> {
        let resolved = self
            .day_end_anchor(date)?
            .and_then(|dt| range::last_of_month(&dt, month_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// January 1 of the year of `date` (today when `None`), `year_offset` years away
    pub fn start_of_year(&self, date: Option<DateInput>, pattern: &str, year_offset: i32) -> Result<String> {
        let resolved = self
            .day_start_anchor(date)?
            .and_then(|dt| range::first_of_year(&dt, year_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    /// December 31 of the year of `date` (today when `None`), `year_offset` years away
    pub fn end_of_year(&self, date: Option<DateInput>, pattern: &str, year_offset: i32) -> Result<String> {
        let resolved = self
            .day_end_anchor(date)?
            .and_then(|dt| range::last_of_year(&dt, year_offset));
        Ok(format::render_or_invalid(resolved, pattern))
    }

    fn midnight_today(&self) -> DateTime<Local> {
        range::start_of_day(&self.now())
    }

    /// Start of `date`, or of today when none was given
    fn day_start_anchor(&self, date: Option<DateInput>) -> Result<Option<DateTime<Local>>> {
        match date {
            Some(date) => Ok(date.checked()?.map(|dt| range::start_of_day(&dt))),
            None => Ok(Some(self.midnight_today())),
        }
    }

    /// End of `date`, or the start of today when none was given
    fn day_end_anchor(&self, date: Option<DateInput>) -> Result<Option<DateTime<Local>>> {
        match date {
            Some(date) => Ok(date.checked()?.and_then(|dt| range::end_of_day(&dt))),
            None => Ok(Some(self.midnight_today())),
        }
    }
}

fn monday_shifted(dt: &DateTime<Local>, week_offset: i64) -> Option<DateTime<Local>> {
    range::monday_of_week(dt).and_then(|monday| range::shift_days(&monday, week_offset.checked_mul(7)?))
}

/// Whole `unit_ms` spans from `start` to `end`, floored
///
/// `None` when either side is not a readable date.
fn span_in(start: impl Into<DateInput>, end: impl Into<DateInput>, unit_ms: i64) -> Result<Option<i64>> {
    let start = start.into();
    let end = end.into();
    start.validate()?;
    end.validate()?;

    Ok(match (start.resolve(), end.resolve()) {
        (Some(start), Some(end)) => Some((end - start).num_milliseconds().div_euclid(unit_ms)),
        _ => None,
    })
}

/// Whole seconds from `start` to `end`
pub fn diff_seconds(start: impl Into<DateInput>, end: impl Into<DateInput>) -> Result<Option<i64>> {
    span_in(start, end, SECOND_MS)
}

/// Whole minutes from `start` to `end`
pub fn diff_minutes(start: impl Into<DateInput>, end: impl Into<DateInput>) -> Result<Option<i64>> {
    span_in(start, end, MINUTE_MS)
}

/// Whole hours from `start` to `end`
pub fn diff_hours(start: impl Into<DateInput>, end: impl Into<DateInput>) -> Result<Option<i64>> {
    span_in(start, end, HOUR_MS)
}

/// Whole days from `start` to `end`
pub fn diff_days(start: impl Into<DateInput>, end: impl Into<DateInput>) -> Result<Option<i64>> {
    span_in(start, end, DAY_MS)
}

pub fn format_date(date: impl Into<DateInput>, pattern: &str) -> Result<String> {
    DateTools::new().format(date, pattern)
}

pub fn relative_time(date: impl Into<DateInput>) -> Result<String> {
    DateTools::new().relative(date)
}

pub fn today(pattern: &str) -> String {
    DateTools::new().today(pattern)
}

pub fn start_of_day(date: impl Into<DateInput>, pattern: &str, day_offset: i64) -> Result<String> {
    DateTools::new().start_of_day(date, pattern, day_offset)
}

pub fn end_of_day(date: impl Into<DateInput>, pattern: &str, day_offset: i64) -> Result<String> {
    DateTools::new().end_of_day(date, pattern, day_offset)
}

pub fn start_of_week(date: Option<DateInput>, pattern: &str, week_offset: i64) -> Result<String> {
    DateTools::new().start_of_week(date, pattern, week_offset)
}

pub fn end_of_week(date: Option<DateInput>, pattern: &str, week_offset: i64) -> Result<String> {
    DateTools::new().end_of_week(date, pattern, week_offset)
}

pub fn start_of_month(date: Option<DateInput>, pattern: &str, month_offset: i32) -> Result<String> {
    DateTools::new().start_of_month(date, pattern, month_offset)
}

pub fn end_of_month(date: Option<DateInput>, pattern: &str, month_offset: i32) -> Result<String> {
    DateTools::new().end_of_month(date, pattern, month_offset)
}

pub fn start_of_year(date: Option<DateInput>, pattern: &str, year_offset: i32) -> Result<String> {
    DateTools::new().start_of_year(date, pattern, year_offset)
}

pub fn end_of_year(date: Option<DateInput>, pattern: &str, year_offset: i32) -> Result<String> {
    DateTools::new().end_of_year(date, pattern, year_offset)
}
