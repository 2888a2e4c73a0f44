use chrono::{Duration, Local, TimeZone};
use daykit::date::*;
use daykit::ValidationError;

fn fixed_tools() -> (DateTools<FixedClock>, chrono::DateTime<Local>) {
    let now = Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    (DateTools::with_clock(FixedClock::new(now)), now)
}

#[test]
fn test_relative_just_now() {
    let (tools, now) = fixed_tools();
    assert_eq!(tools.relative(now).unwrap(), "just now");
    assert_eq!(tools.relative(now - Duration::seconds(59)).unwrap(), "just now");
}

#[test]
fn test_relative_minutes() {
    let (tools, now) = fixed_tools();
    assert_eq!(tools.relative(now - Duration::seconds(90)).unwrap(), "1 minute ago");
    assert_eq!(tools.relative(now - Duration::minutes(45)).unwrap(), "45 minutes ago");
}

#[test]
fn test_relative_hours() {
    let (tools, now) = fixed_tools();
    assert_eq!(tools.relative(now - Duration::minutes(61)).unwrap(), "1 hour ago");
    assert_eq!(tools.relative(now - Duration::hours(23)).unwrap(), "23 hours ago");
}

#[test]
fn test_relative_days() {
    let (tools, now) = fixed_tools();
    assert_eq!(tools.relative(now - Duration::hours(25)).unwrap(), "yesterday");
    assert_eq!(tools.relative(now - Duration::hours(47)).unwrap(), "yesterday");
    assert_eq!(tools.relative(now - Duration::days(3)).unwrap(), "3 days ago");
}

#[test]
fn test_relative_future_is_just_now() {
    let (tools, now) = fixed_tools();
    assert_eq!(tools.relative(now + Duration::days(2)).unwrap(), "just now");
}

#[test]
fn test_relative_from_string_and_timestamp() {
    let (tools, now) = fixed_tools();
    assert_eq!(tools.relative("2025-06-12 12:00:00").unwrap(), "3 days ago");

    let millis = (now - Duration::minutes(5)).timestamp_millis();
    assert_eq!(tools.relative(millis).unwrap(), "5 minutes ago");
}

#[test]
fn test_relative_chinese_labels() {
    let (tools, now) = fixed_tools();
    let tools = tools.with_language(Language::Chinese);

    assert_eq!(tools.relative(now).unwrap(), "刚刚");
    assert_eq!(tools.relative(now - Duration::minutes(5)).unwrap(), "5分钟前");
    assert_eq!(tools.relative(now - Duration::hours(2)).unwrap(), "2小时前");
    assert_eq!(tools.relative(now - Duration::hours(30)).unwrap(), "昨天");
    assert_eq!(tools.relative(now - Duration::days(4)).unwrap(), "4天前");
}

#[test]
fn test_relative_unreadable_date_is_just_now() {
    let (tools, _) = fixed_tools();
    assert_eq!(tools.relative("last tuesday").unwrap(), "just now");
}

#[test]
fn test_relative_rejects_empty_date() {
    let (tools, _) = fixed_tools();
    assert_eq!(tools.relative(""), Err(ValidationError::EmptyDate));
}

#[test]
fn test_relative_with_host_clock() {
    assert_eq!(relative_time(Local::now()).unwrap(), "just now");
    assert_eq!(relative_time(Local::now() - Duration::hours(25)).unwrap(), "yesterday");
}

#[test]
fn test_elapsed_classification() {
    assert_eq!(Elapsed::from_span(0), Elapsed::JustNow);
    assert_eq!(Elapsed::from_span(-1), Elapsed::JustNow);
    assert_eq!(Elapsed::from_span(60_000), Elapsed::Minutes(1));
    assert_eq!(Elapsed::from_span(3_600_000), Elapsed::Hours(1));
    assert_eq!(Elapsed::from_span(86_400_000), Elapsed::Yesterday);
    assert_eq!(Elapsed::from_span(2 * 86_400_000), Elapsed::Days(2));
}
