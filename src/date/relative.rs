//! Human readable "time ago" descriptions

use crate::constants::{
    DAY_MS, HOUR_MS, LABEL_JUST_NOW_EN, LABEL_JUST_NOW_ZH, LABEL_YESTERDAY_EN, LABEL_YESTERDAY_ZH, MINUTE_MS,
};
use serde::{Deserialize, Serialize};

/// Language of the relative-time labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

/// Coarse classification of an elapsed span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Yesterday,
    Days(i64),
}

impl Elapsed {
    /// Classify `now - then` in milliseconds
    ///
    /// Spans are floored into days, hours and minutes and the largest
    /// non-zero unit wins. Negative spans (dates in the future) read as just now.
    pub fn from_span(span_ms: i64) -> Self {
        let days = span_ms.div_euclid(DAY_MS);
        let hours = span_ms.div_euclid(HOUR_MS);
        let minutes = span_ms.div_euclid(MINUTE_MS);

        if days == 1 {
            Elapsed::Yesterday
        } else if days > 1 {
            Elapsed::Days(days)
        } else if hours > 0 {
            Elapsed::Hours(hours)
        } else if minutes > 0 {
            Elapsed::Minutes(minutes)
        } else {
            Elapsed::JustNow
        }
    }

    /// Label in the requested language
    pub fn label(self, language: Language) -> String {
        match language {
            Language::English => match self {
                Elapsed::JustNow => LABEL_JUST_NOW_EN.to_string(),
                Elapsed::Minutes(n) => format!("{} {} ago", n, plural(n, "minute")),
                Elapsed::Hours(n) => format!("{} {} ago", n, plural(n, "hour")),
                Elapsed::Yesterday => LABEL_YESTERDAY_EN.to_string(),
                Elapsed::Days(n) => format!("{} days ago", n),
            },
            Language::Chinese => match self {
                Elapsed::JustNow => LABEL_JUST_NOW_ZH.to_string(),
                Elapsed::Minutes(n) => format!("{}分钟前", n),
                Elapsed::Hours(n) => format!("{}小时前", n),
                Elapsed::Yesterday => LABEL_YESTERDAY_ZH.to_string(),
                Elapsed::Days(n) => format!("{}天前", n),
            },
        }
    }
}

/// Describe how long ago something happened, given `now - then` in milliseconds
#[must_use]
pub fn describe_span(span_ms: i64, language: Language) -> String {
    Elapsed::from_span(span_ms).label(language)
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
