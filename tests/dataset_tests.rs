mod common;
use chrono::NaiveDate;
use common::{upload, upload_with_header};
use tsreport::errors::AppError;
use tsreport::report::dataset::RawTable;

#[test]
fn test_missing_client_column_is_reported() {
    let up = upload_with_header(
        "Project,User,Start Date,Duration (h)",
        &["Apollo,Alice,01/01/2025,01:00:00"],
    );
    let table = RawTable::from_upload(&up).expect("csv parses");

    assert_eq!(table.missing_columns(), vec!["Client".to_string()]);

    match table.into_entries() {
        Err(AppError::MissingColumns(cols)) => assert_eq!(cols, vec!["Client"]),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_all_missing_columns_are_listed_in_order() {
    let up = upload_with_header("Notes", &["hello"]);
    let err = RawTable::from_upload(&up)
        .expect("csv parses")
        .validate()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Missing required columns: Project, Client, User, Start Date, Duration (h)"
    );
}

#[test]
fn test_optional_columns_get_defaults() {
    let up = upload_with_header(
        "Project,Client,User,Start Date,Duration (h)",
        &["Apollo,NASA,Alice,01/01/2025,01:00:00"],
    );
    let ingested = RawTable::from_upload(&up)
        .unwrap()
        .into_entries()
        .unwrap();

    let e = &ingested.entries[0];
    assert_eq!(e.billable, "No");
    assert_eq!(e.description, "");
    assert_eq!(e.raw_seconds, 3600);
}

#[test]
fn test_blank_cells_default_or_skip() {
    let up = upload(&[
        // blank duration and billable fall back to their defaults
        "Apollo,NASA,Alice,01/01/2025,,,",
        // blank user: the row cannot be attributed and is skipped
        "Apollo,NASA,,01/01/2025,01:00:00,Yes,x",
        "Apollo,NASA,Bob,02/01/2025,00:30:00,Yes,y",
        // blank project, client and date still count for the user
        ",,Bob,,02:00:00,No,z",
    ]);
    let ingested = RawTable::from_upload(&up)
        .unwrap()
        .into_entries()
        .unwrap();

    assert_eq!(ingested.skipped_rows, 1);
    assert_eq!(ingested.entries.len(), 3);
    assert_eq!(ingested.entries[0].duration, "00:00:00");
    assert_eq!(ingested.entries[0].billable, "No");
    assert!(!ingested.entries[0].malformed_duration);
    assert_eq!(ingested.entries[1].user, "Bob");

    let undated = &ingested.entries[2];
    assert_eq!(undated.project, "");
    assert_eq!(undated.client, "");
    assert_eq!(undated.parsed_date, None);
    assert_eq!(undated.rounded_seconds, 7200);
}

#[test]
fn test_derived_fields() {
    let up = upload(&[
        "Apollo,NASA,Alice,05/05/2025,01:00:29,No,",
        "Apollo,NASA,Alice,not a date,bogus,No,",
    ]);
    let entries = RawTable::from_upload(&up)
        .unwrap()
        .into_entries()
        .unwrap()
        .entries;

    assert_eq!(entries[0].rounded_seconds, 3600);
    assert_eq!(entries[0].parsed_date, NaiveDate::from_ymd_opt(2025, 5, 5));

    assert_eq!(entries[1].parsed_date, None);
    assert!(entries[1].malformed_duration);
    assert_eq!(entries[1].raw_seconds, 0);
}

#[test]
fn test_short_rows_read_as_blank() {
    let up = upload(&["Apollo,NASA,Alice,01/01/2025,02:00:00"]);
    let entries = RawTable::from_upload(&up)
        .unwrap()
        .into_entries()
        .unwrap()
        .entries;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].billable, "No");
    assert_eq!(entries[0].raw_seconds, 7200);
}
