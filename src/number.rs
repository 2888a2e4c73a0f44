//! Thousand-separator number formatting

use crate::config::NumberConfig;
use crate::constants::DEFAULT_GROUP_SEPARATOR;
use std::fmt::Display;

/// Format `value` with `group_separator` between groups of three integer digits
///
/// The value's own textual form is used, so numbers and numeric strings both
/// work. When `decimal_places` is set the fraction is truncated, never
/// rounded, to that many digits. An empty fraction drops the decimal point.
///
/// ```ignore
/// assert_eq!(format_number(1234567.891, ",", Some(2)), "1,234,567.89");
/// assert_eq!(format_number("-9876543", " ", None), "-9 876 543");
/// ```
#[must_use]
pub fn format_number(value: impl Display, group_separator: &str, decimal_places: Option<usize>) -> String {
    let text = value.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (text.as_str(), ""),
    };

    let grouped = group_digits(integer, group_separator);
    let fraction: String = match decimal_places {
        Some(places) => fraction.chars().take(places).collect(),
        None => fraction.to_string(),
    };

    if fraction.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

/// Insert `separator` before every third digit counted from the right of the
/// trailing digit run, never at a word boundary
fn group_digits(integer: &str, separator: &str) -> String {
    let digits = integer.chars().rev().take_while(char::is_ascii_digit).count();
    let run_start = integer.len() - digits;
    let prefix = &integer[..run_start];
    let run = &integer[run_start..];

    // A separator at the start of the run only goes in after another word character
    let glued_to_word = prefix
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');

    let mut out = String::with_capacity(integer.len() + digits / 3 * separator.len());
    out.push_str(prefix);
    for (i, digit) in run.chars().enumerate() {
        let remaining = digits - i;
        if remaining % 3 == 0 && (i > 0 || glued_to_word) {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

/// Number formatting with fixed settings
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    group_separator: String,
    decimal_places: Option<usize>,
}

impl NumberFormatter {
    pub fn new(group_separator: impl Into<String>, decimal_places: Option<usize>) -> Self {
        Self {
            group_separator: group_separator.into(),
            decimal_places,
        }
    }

    /// Build from the `[number]` configuration section
    pub fn from_config(config: &NumberConfig) -> Self {
        Self::new(config.group_separator.clone(), config.decimal_places)
    }

    #[must_use]
    pub fn format(&self, value: impl Display) -> String {
        format_number(value, &self.group_separator, self.decimal_places)
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_SEPARATOR, None)
    }
}
