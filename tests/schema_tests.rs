mod common;
use chrono::NaiveDate;
use common::{request, shared_strings, upload};
use tsreport::errors::AppError;
use tsreport::models::{OutputFormat, ReportColumn, ReportSchema};
use tsreport::report::ReportDriver;

fn render(schema: ReportSchema) -> String {
    let up = upload(&[
        "Apollo,NASA,Alice,01/01/2025,01:00:00,Yes,Kickoff meeting",
        "Gemini,ESA,Alice,01/01/2025,00:30:00,No,Code review",
    ]);
    let at = NaiveDate::from_ymd_opt(2025, 1, 31)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    let artifact = ReportDriver::default()
        .generate_at(&up, &request(schema, OutputFormat::Decimal), at)
        .unwrap();
    shared_strings(&artifact.bytes)
}

#[test]
fn test_schema_keys_round_trip() {
    for schema in ReportSchema::ALL {
        assert_eq!(ReportSchema::from_key(schema.key()).unwrap(), schema);
    }
    assert_eq!(
        ReportSchema::from_key(" Project_Focused ").unwrap(),
        ReportSchema::ProjectFocused
    );
    assert!(matches!(
        ReportSchema::from_key("fancy"),
        Err(AppError::InvalidSchema(_))
    ));
}

#[test]
fn test_declared_columns() {
    use ReportColumn::*;
    assert_eq!(ReportSchema::Classic.columns(), &[Day, TotalDuration, Projects]);
    assert_eq!(ReportSchema::Minimalist.columns(), &[Day, TotalDuration]);
    assert_eq!(
        ReportSchema::Detailed.columns(),
        &[Day, TotalDuration, Projects, Descriptions, BillableStatus]
    );
    assert_eq!(
        ReportSchema::ProjectFocused.columns(),
        &[Project, Day, Duration, Description]
    );
    assert!(!ReportSchema::Minimalist.show_details());
    assert!(ReportSchema::Detailed.show_details());
}

#[test]
fn test_classic_layout() {
    let s = render(ReportSchema::Classic);
    assert!(s.contains("Total Duration"));
    assert!(s.contains(">Projects<"));
    assert!(s.contains(">Apollo, Gemini<"));
    assert!(!s.contains("Kickoff meeting"));
}

#[test]
fn test_minimalist_layout_has_no_details() {
    let s = render(ReportSchema::Minimalist);
    assert!(s.contains("Total Duration"));
    assert!(!s.contains(">Projects<"));
    assert!(!s.contains(">Apollo, Gemini<"));
}

#[test]
fn test_detailed_layout() {
    let s = render(ReportSchema::Detailed);
    assert!(s.contains("Billable Status"));
    assert!(s.contains("Kickoff meeting; Code review"));
    assert!(s.contains(">Mixed<"));
}

#[test]
fn test_project_focused_layout() {
    let s = render(ReportSchema::ProjectFocused);
    assert!(s.contains(">Project<"));
    assert!(s.contains(">Description<"));
    assert!(s.contains(">Duration<"));
    assert!(!s.contains("Total Duration"));
}

#[test]
fn test_output_format_keys() {
    assert_eq!(OutputFormat::from_key("decimal").unwrap(), OutputFormat::Decimal);
    assert_eq!(OutputFormat::from_key("HOURS").unwrap(), OutputFormat::Hours);
    assert!(matches!(
        OutputFormat::from_key("minutes"),
        Err(AppError::InvalidOutputFormat(_))
    ));
    assert_eq!(OutputFormat::Hours.num_format(), "[h]:mm");
    assert_eq!(OutputFormat::Decimal.convert(5400), 1.5);
    assert_eq!(OutputFormat::Hours.convert(43200), 0.5);
}
