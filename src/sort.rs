//! Mixed content sorting
//!
//! Records are ordered by one field, read through an extractor closure. The
//! comparison depends on what the two values look like:
//!
//! - both contain CJK ideographs: CJK locale collation ("zh" by default)
//! - both are all ASCII digits: numeric order, so "2" sorts before "10"
//! - anything else: text locale collation ("en" by default)
//!
//! Values that are neither text nor numbers sort before everything else. To
//! keep the order total, mixed comparisons fall back to a fixed class order:
//! missing values, then digit strings, then other text, then CJK text.
//!
//! Decimals and negatives are not digit strings, so they sort with the text
//! after every digit string: `["10", "2", "1.5"]` sorts to `2, 10, 1.5`.
//! Integer fields keep every digit and sort numerically at any size.

use crate::config::SortConfig;
use crate::constants::{DEFAULT_CJK_LOCALE, DEFAULT_TEXT_LOCALE};
use anyhow::Result;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale::Locale;
use once_cell::sync::Lazy;
use std::cmp::Ordering;

static DEFAULT_SORTER: Lazy<MixedSorter> = Lazy::new(MixedSorter::default);

/// The value a record is sorted by
#[derive(Debug, Clone, PartialEq)]
pub enum SortField {
    Text(String),
    Number(f64),
    /// Anything that is neither text nor a number
    Other,
}

impl From<&str> for SortField {
    fn from(value: &str) -> Self {
        SortField::Text(value.to_string())
    }
}

impl From<String> for SortField {
    fn from(value: String) -> Self {
        SortField::Text(value)
    }
}

impl From<&String> for SortField {
    fn from(value: &String) -> Self {
        SortField::Text(value.clone())
    }
}

impl From<f64> for SortField {
    fn from(value: f64) -> Self {
        SortField::Number(value)
    }
}

impl From<i64> for SortField {
    fn from(value: i64) -> Self {
        SortField::Text(value.to_string())
    }
}

impl From<u64> for SortField {
    fn from(value: u64) -> Self {
        SortField::Text(value.to_string())
    }
}

impl From<i32> for SortField {
    fn from(value: i32) -> Self {
        SortField::Number(f64::from(value))
    }
}

impl From<u32> for SortField {
    fn from(value: u32) -> Self {
        SortField::Number(f64::from(value))
    }
}

impl<T: Into<SortField>> From<Option<T>> for SortField {
    fn from(value: Option<T>) -> Self {
        value.map_or(SortField::Other, Into::into)
    }
}

/// How a value takes part in comparisons, in fallback order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Other,
    Digits,
    Text,
    Cjk,
}

/// CJK unified ideographs U+4E00..=U+9FA5
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

/// Non-empty and made only of ASCII digits
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn classify(text: Option<&str>) -> Class {
    match text {
        None => Class::Other,
        Some(text) if contains_cjk(text) => Class::Cjk,
        Some(text) if is_all_digits(text) => Class::Digits,
        Some(_) => Class::Text,
    }
}

/// Compare two digit strings by value without overflowing
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn build_collator(locale: &str) -> Result<CollatorBorrowed<'static>> {
    let locale: Locale = locale
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid BCP-47 locale '{}': {:?}", locale, e))?;
    Collator::try_new(CollatorPreferences::from(&locale), CollatorOptions::default())
        .map_err(|e| anyhow::anyhow!("Failed to create collator for '{}': {:?}", locale, e))
}

/// Sorts records by one field, with locale collation for text
#[derive(Debug)]
pub struct MixedSorter {
    cjk: Option<CollatorBorrowed<'static>>,
    text: Option<CollatorBorrowed<'static>>,
}

impl MixedSorter {
    /// Build with explicit BCP-47 locales for CJK and other text
    pub fn try_new(cjk_locale: &str, text_locale: &str) -> Result<Self> {
        Ok(Self {
            cjk: Some(build_collator(cjk_locale)?),
            text: Some(build_collator(text_locale)?),
        })
    }

    /// Build from the `[sort]` configuration section
    pub fn from_config(config: &SortConfig) -> Result<Self> {
        Self::try_new(&config.cjk_locale, &config.default_locale)
    }

    /// Compare two field values
    pub fn compare(&self, a: &SortField, b: &SortField) -> Ordering {
        let a = text_form(a);
        let b = text_form(b);
        let (class_a, class_b) = (classify(a.as_deref()), classify(b.as_deref()));

        match (a.as_deref(), b.as_deref()) {
            (Some(a), Some(b)) if class_a == Class::Cjk && class_b == Class::Cjk => {
                collate(self.cjk.as_ref(), a, b)
            }
            (Some(a), Some(b)) if class_a == Class::Digits && class_b == Class::Digits => compare_digits(a, b),
            (Some(a), Some(b)) if class_a == class_b => collate(self.text.as_ref(), a, b),
            _ => class_a.cmp(&class_b),
        }
    }

    /// Stable sort of `records` by the field `field` extracts
    ///
    /// Each record's field is extracted once.
    pub fn sort<T, F>(&self, records: &mut Vec<T>, field: F)
    where
        F: Fn(&T) -> SortField,
    {
        let mut keyed: Vec<(SortField, T)> = records.drain(..).map(|record| (field(&record), record)).collect();
        keyed.sort_by(|(a, _), (b, _)| self.compare(a, b));
        records.extend(keyed.into_iter().map(|(_, record)| record));
    }
}

impl Default for MixedSorter {
    /// "zh" and "en" collation, or plain code point order when collation data is unavailable
    fn default() -> Self {
        Self::try_new(DEFAULT_CJK_LOCALE, DEFAULT_TEXT_LOCALE).unwrap_or_else(|e| {
            log::warn!("Falling back to code point ordering: {}", e);
            Self { cjk: None, text: None }
        })
    }
}

/// String form of a field, `None` for [`SortField::Other`]
fn text_form(field: &SortField) -> Option<std::borrow::Cow<'_, str>> {
    match field {
        SortField::Text(text) => Some(text.as_str().into()),
        SortField::Number(n) => Some(n.to_string().into()),
        SortField::Other => None,
    }
}

fn collate(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Sort `records` by `field` with the default "zh"/"en" collation
///
/// ```ignore
/// let rows = sort_by_field(vec!["10", "2", "1"], |n| (*n).into());
/// assert_eq!(rows, ["1", "2", "10"]);
/// ```
pub fn sort_by_field<T, F>(mut records: Vec<T>, field: F) -> Vec<T>
where
    F: Fn(&T) -> SortField,
{
    DEFAULT_SORTER.sort(&mut records, field);
    records
}
