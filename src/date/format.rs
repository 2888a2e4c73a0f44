//! Pattern based date formatting
//!
//! Patterns use letter runs as placeholders:
//!
//! | Token | Value                          |
//! |-------|--------------------------------|
//! | `y+`  | year, last `min(4, run)` digits |
//! | `M+`  | month (1-12)                   |
//! | `d+`  | day of month                   |
//! | `H+`  | hour (0-23)                    |
//! | `m+`  | minute                         |
//! | `s+`  | second                         |
//! | `q+`  | quarter (1-4)                  |
//! | `S`   | milliseconds                   |
//! | `D`   | weekday, e.g. `星期一`          |
//!
//! Only the first run of each token is replaced. A one-letter run renders
//! the bare value, longer runs render two zero-padded digits.

use crate::constants::{INVALID_DATE, WEEKDAY_DIGITS, WEEKDAY_PREFIX};
use chrono::{DateTime, Datelike, Local, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("y+").expect("valid year token regex"));

/// Field tokens in substitution order
static FIELD_RUNS: Lazy<Vec<(Field, Regex)>> = Lazy::new(|| {
    [
        (Field::Month, "M+"),
        (Field::Day, "d+"),
        (Field::Hour, "H+"),
        (Field::Minute, "m+"),
        (Field::Second, "s+"),
        (Field::Quarter, "q+"),
        (Field::Millisecond, "S"),
        (Field::Weekday, "D"),
    ]
    .into_iter()
    .map(|(field, token)| (field, Regex::new(token).expect("valid field token regex")))
    .collect()
});

#[derive(Debug, Clone, Copy)]
enum Field {
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Quarter,
    Millisecond,
    Weekday,
}

impl Field {
    fn value(self, dt: &DateTime<Local>) -> String {
        match self {
            Field::Month => dt.month().to_string(),
            Field::Day => dt.day().to_string(),
            Field::Hour => dt.hour().to_string(),
            Field::Minute => dt.minute().to_string(),
            Field::Second => dt.second().to_string(),
            Field::Quarter => ((dt.month0() + 3) / 3).to_string(),
            Field::Millisecond => (dt.timestamp_subsec_millis() % 1000).to_string(),
            Field::Weekday => {
                let index = dt.weekday().num_days_from_sunday() as usize;
                format!("{}{}", WEEKDAY_PREFIX, WEEKDAY_DIGITS[index])
            }
        }
    }
}

/// Render a resolved date with `pattern`
#[must_use]
pub fn render(dt: &DateTime<Local>, pattern: &str) -> String {
    let mut out = pattern.to_string();

    if let Some(run) = YEAR_RUN.find(&out).map(|m| m.range()) {
        let year = dt.year().to_string();
        let keep_from = 4usize.saturating_sub(run.len()).min(year.len());
        out.replace_range(run, &year[keep_from..]);
    }

    for (field, regex) in FIELD_RUNS.iter() {
        let Some(run) = regex.find(&out).map(|m| m.range()) else {
            continue;
        };
        let value = field.value(dt);
        let rendered = if run.len() == 1 { value } else { pad_two(&value) };
        out.replace_range(run, &rendered);
    }

    out
}

/// Render a possibly unreadable date, falling back to [`INVALID_DATE`]
#[must_use]
pub fn render_or_invalid(dt: Option<DateTime<Local>>, pattern: &str) -> String {
    match dt {
        Some(dt) => render(&dt, pattern),
        None => {
            log::debug!("Unreadable date, rendering '{}' for pattern '{}'", INVALID_DATE, pattern);
            INVALID_DATE.to_string()
        }
    }
}

/// Last two characters of the value after left-padding it with zeros
fn pad_two(value: &str) -> String {
    let padded = format!("00{value}");
    padded[value.len()..].to_string()
}
