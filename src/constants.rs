//! Constants used throughout the library
//!
//! This module centralizes default patterns, time spans and label text.

// Default Patterns
pub const DEFAULT_DATETIME_PATTERN: &str = "yyyy/MM/dd HH:mm:ss";
pub const DEFAULT_DAY_PATTERN: &str = "yyyy/MM/dd";
pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";

// Time Spans (milliseconds)
pub const SECOND_MS: i64 = 1000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

// Rendering of a date that could not be read
pub const INVALID_DATE: &str = "Invalid Date";

// Weekday names for the `D` token, indexed from Sunday
pub const WEEKDAY_PREFIX: &str = "星期";
pub const WEEKDAY_DIGITS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

// Relative Time Labels
pub const LABEL_JUST_NOW_EN: &str = "just now";
pub const LABEL_YESTERDAY_EN: &str = "yesterday";
pub const LABEL_JUST_NOW_ZH: &str = "刚刚";
pub const LABEL_YESTERDAY_ZH: &str = "昨天";

// Collation Locales
pub const DEFAULT_CJK_LOCALE: &str = "zh";
pub const DEFAULT_TEXT_LOCALE: &str = "en";

// Configuration
pub const CONFIG_FILE_NAME: &str = "daykit.toml";
pub const CONFIG_DIR_NAME: &str = "daykit";
pub const CONFIG_GENERATED: &str = "Generated default configuration";
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
