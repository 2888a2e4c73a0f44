//! Calendar boundary arithmetic on local date-times
//!
//! Each function keeps the wall-clock time of its input unless it says
//! otherwise, and returns `None` when the result falls outside chrono's range.

use super::input::to_local;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime};

/// Local midnight of the same day
pub fn start_of_day(dt: &DateTime<Local>) -> DateTime<Local> {
    to_local(dt.date_naive().and_time(NaiveTime::MIN))
}

/// Local 23:59:59.000 of the same day
pub fn end_of_day(dt: &DateTime<Local>) -> Option<DateTime<Local>> {
    dt.date_naive().and_hms_opt(23, 59, 59).map(to_local)
}

/// Move by whole calendar days
pub fn shift_days(dt: &DateTime<Local>, days: i64) -> Option<DateTime<Local>> {
    dt.naive_local()
        .checked_add_signed(Duration::try_days(days)?)
        .map(to_local)
}

/// Monday of the week containing `dt`, Sunday counting as the seventh day
pub fn monday_of_week(dt: &DateTime<Local>) -> Option<DateTime<Local>> {
    let back = dt.weekday().num_days_from_monday() as i64;
    shift_days(dt, -back)
}

/// First day of the month `offset` months away
pub fn first_of_month(dt: &DateTime<Local>, offset: i32) -> Option<DateTime<Local>> {
    let (year, month) = add_months(dt.year(), dt.month0(), offset)?;
    with_date(dt, NaiveDate::from_ymd_opt(year, month, 1)?)
}

/// Last day of the month `offset` months away
pub fn last_of_month(dt: &DateTime<Local>, offset: i32) -> Option<DateTime<Local>> {
    let (year, month) = add_months(dt.year(), dt.month0(), offset.checked_add(1)?)?;
    let first_of_next = NaiveDate::from_ymd_opt(year, month, 1)?;
    with_date(dt, first_of_next.pred_opt()?)
}

/// January 1 of the year `offset` years away
pub fn first_of_year(dt: &DateTime<Local>, offset: i32) -> Option<DateTime<Local>> {
    with_date(dt, NaiveDate::from_ymd_opt(dt.year().checked_add(offset)?, 1, 1)?)
}

/// December 31 of the year `offset` years away
pub fn last_of_year(dt: &DateTime<Local>, offset: i32) -> Option<DateTime<Local>> {
    with_date(dt, NaiveDate::from_ymd_opt(dt.year().checked_add(offset)?, 12, 31)?)
}

/// Same wall-clock time on another day
fn with_date(dt: &DateTime<Local>, date: NaiveDate) -> Option<DateTime<Local>> {
    Some(to_local(date.and_time(dt.time())))
}

/// Add months to a zero-based month, returning a year and a one-based month
fn add_months(year: i32, month0: u32, offset: i32) -> Option<(i32, u32)> {
    let total = year.checked_mul(12)?.checked_add(month0 as i32)?.checked_add(offset)?;
    Some((total.div_euclid(12), total.rem_euclid(12) as u32 + 1))
}
