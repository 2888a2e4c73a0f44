//! daykit - date, number and sorting helpers
//!
//! This library provides pattern based date formatting, relative "time ago"
//! descriptions, day/week/month/year boundaries, time spans, thousand
//! separator number formatting and a locale-aware mixed sort.
//!
//! # Modules
//!
//! * [`config`] - Library configuration management
//! * [`date`] - Date formatting, relative time and calendar arithmetic
//! * [`number`] - Thousand-separator number formatting
//! * [`sort`] - Mixed CJK / numeric / text sorting
//! * [`logger`] - Logging setup for applications embedding the library

/// Configuration module for managing library defaults
pub mod config;

/// Library constants and default values
pub mod constants;

/// Date formatting and calendar arithmetic
pub mod date;

/// Error types
pub mod error;

/// Logging setup based on `fern`
pub mod logger;

/// Number formatting with digit grouping
pub mod number;

/// Locale-aware mixed sorting
pub mod sort;

pub use date::{
    diff_days, diff_hours, diff_minutes, diff_seconds, end_of_day, end_of_month, end_of_week, end_of_year,
    format_date, normalize_separators, relative_time, start_of_day, start_of_month, start_of_week,
    start_of_year, today, Clock, DateInput, DateTools, FixedClock, Language, SystemClock,
};
pub use error::ValidationError;
pub use number::{format_number, NumberFormatter};
pub use sort::{sort_by_field, MixedSorter, SortField};
