use daykit::date::*;
use daykit::ValidationError;

#[test]
fn test_diff_seconds_and_minutes() {
    let start = "2025-01-31 00:00:00";
    let end = "2025-01-31 00:01:30";
    assert_eq!(diff_seconds(start, end).unwrap(), Some(90));
    assert_eq!(diff_minutes(start, end).unwrap(), Some(1));
}

#[test]
fn test_diff_floors_negative_spans() {
    // -1.5 minutes floors to -2
    assert_eq!(diff_minutes("2025-01-31 00:01:30", "2025-01-31 00:00:00").unwrap(), Some(-2));
}

#[test]
fn test_diff_hours_and_days() {
    let start = "2025-01-30 12:00";
    let end = "2025-01-31 13:00";
    assert_eq!(diff_hours(start, end).unwrap(), Some(25));
    assert_eq!(diff_days(start, end).unwrap(), Some(1));
    assert_eq!(diff_days(end, start).unwrap(), Some(-2));
}

#[test]
fn test_diff_seconds_is_antisymmetric() {
    let pairs = [
        ("2025-01-31 00:00:00", "2025-01-31 08:15:42"),
        ("2024-02-28 23:59:59", "2024-03-01 00:00:01"),
        ("2025-01-01", "2025-01-01"),
    ];
    for (a, b) in pairs {
        let forward = diff_seconds(a, b).unwrap().unwrap();
        let backward = diff_seconds(b, a).unwrap().unwrap();
        assert_eq!(forward, -backward, "{} -> {}", a, b);
    }
}

#[test]
fn test_diff_timestamps() {
    assert_eq!(diff_seconds(0i64, 90_000i64).unwrap(), Some(90));
    assert_eq!(diff_days(0i64, 86_400_000i64 * 3 - 1).unwrap(), Some(2));
}

#[test]
fn test_diff_unreadable_date() {
    assert_eq!(diff_seconds("yesterday", "2025-01-31").unwrap(), None);
    assert_eq!(diff_days("2025-01-31", "tomorrow").unwrap(), None);
}

#[test]
fn test_diff_rejects_empty_dates() {
    assert_eq!(diff_seconds("", "2025-01-31"), Err(ValidationError::EmptyDate));
    assert_eq!(diff_hours("2025-01-31", ""), Err(ValidationError::EmptyDate));
}
