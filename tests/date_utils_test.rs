use chrono::NaiveDate;
use todoboard::utils::date::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_ymd(date), "2023-12-25");
}

#[test]
fn test_parse_ymd_requires_padding() {
    assert_eq!(parse_ymd("2024-03-05"), NaiveDate::from_ymd_opt(2024, 3, 5));
    assert_eq!(parse_ymd(" 2024-03-05 "), NaiveDate::from_ymd_opt(2024, 3, 5));
    assert_eq!(parse_ymd("2024-3-5"), None);
    assert_eq!(parse_ymd("2024-02-30"), None);
    assert_eq!(parse_ymd(""), None);
}

#[test]
fn test_normalize_ymd() {
    assert_eq!(normalize_ymd("2024-01-01"), Some("2024-01-01".to_string()));
    assert_eq!(normalize_ymd("01/01/2024"), None);
    assert_eq!(normalize_ymd("   "), None);
}

#[test]
fn test_fixed_clock() {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(clock.today_ymd(), "2024-01-01");
}

#[test]
fn test_system_clock_is_iso() {
    let today = SystemClock.today_ymd();
    assert_eq!(today.len(), 10);
    assert!(parse_ymd(&today).is_some());
}
