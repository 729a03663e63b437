mod common;
use chrono::NaiveDate;
use common::upload;
use tsreport::models::TimeEntry;
use tsreport::report::calendar::{CalendarRange, ReportPeriod};
use tsreport::report::dataset::RawTable;
use tsreport::utils::date::parse_start_date;

fn entries(rows: &[&str]) -> Vec<TimeEntry> {
    RawTable::from_upload(&upload(rows))
        .unwrap()
        .into_entries()
        .unwrap()
        .entries
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_range_covers_gaps() {
    let e = entries(&[
        "P,C,Alice,03/01/2025,01:00:00,No,",
        "P,C,Alice,01/01/2025,01:00:00,No,",
        "P,C,Alice,06/01/2025,01:00:00,No,",
    ]);
    let cal = CalendarRange::reconcile(&e);

    assert_eq!(cal.days.len(), 6);
    assert_eq!(cal.days.first(), Some(&ymd(2025, 1, 1)));
    assert_eq!(cal.days.last(), Some(&ymd(2025, 1, 6)));
    assert_eq!(
        cal.labels(),
        vec![
            "01 (Wednesday)",
            "02 (Thursday)",
            "03 (Friday)",
            "04 (Saturday)",
            "05 (Sunday)",
            "06 (Monday)",
        ]
    );
}

#[test]
fn test_unparseable_dates_do_not_widen_range() {
    let e = entries(&[
        "P,C,Alice,10/03/2025,01:00:00,No,",
        "P,C,Alice,2025-03-01,01:00:00,No,",
        "P,C,Alice,11/03/2025,01:00:00,No,",
    ]);
    let cal = CalendarRange::reconcile(&e);
    assert_eq!(cal.days, vec![ymd(2025, 3, 10), ymd(2025, 3, 11)]);
}

#[test]
fn test_start_date_needs_four_digit_year() {
    assert_eq!(parse_start_date("01/01/25"), None);
    assert_eq!(parse_start_date("01/01/02025"), None);
    assert_eq!(parse_start_date(" 01/01/2025 "), Some(ymd(2025, 1, 1)));
}

#[test]
fn test_short_year_does_not_stretch_range() {
    let e = entries(&[
        "P,C,Alice,01/01/25,01:00:00,No,",
        "P,C,Alice,01/01/2025,01:00:00,No,",
    ]);
    let cal = CalendarRange::reconcile(&e);

    assert_eq!(cal.days, vec![ymd(2025, 1, 1)]);
    assert_eq!(e[0].parsed_date, None);
    assert_eq!(ReportPeriod::from_entries(&e).to_string(), "January 2025");
}

#[test]
fn test_no_parseable_date_falls_back_to_single_day() {
    let e = entries(&["P,C,Alice,someday,01:00:00,No,"]);
    let cal = CalendarRange::reconcile(&e);
    assert_eq!(cal.days, vec![ymd(2025, 1, 1)]);
    assert_eq!(ReportPeriod::from_entries(&e).to_string(), "All Data");
}

#[test]
fn test_period_single_month() {
    let e = entries(&[
        "P,C,Alice,01/03/2025,01:00:00,No,",
        "P,C,Alice,31/03/2025,01:00:00,No,",
    ]);
    assert_eq!(ReportPeriod::from_entries(&e).to_string(), "March 2025");
}

#[test]
fn test_period_across_months() {
    let e = entries(&[
        "P,C,Alice,15/04/2025,01:00:00,No,",
        "P,C,Alice,20/03/2025,01:00:00,No,",
    ]);
    assert_eq!(
        ReportPeriod::from_entries(&e).to_string(),
        "March 2025 - April 2025"
    );
}

#[test]
fn test_same_month_different_year_is_a_range() {
    let e = entries(&[
        "P,C,Alice,01/03/2024,01:00:00,No,",
        "P,C,Alice,01/03/2025,01:00:00,No,",
    ]);
    assert_eq!(
        ReportPeriod::from_entries(&e).to_string(),
        "March 2024 - March 2025"
    );
}
