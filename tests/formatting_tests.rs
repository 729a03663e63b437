use tsreport::utils::formatting::{distinct, sanitize_cell, secs2readable};
use tsreport::utils::path::{extension, safe_filename};
use tsreport::utils::table::Table;

#[test]
fn test_sanitize_formula_triggers() {
    assert_eq!(sanitize_cell("=SUM(A1:A10)"), "'=SUM(A1:A10)");
    assert_eq!(sanitize_cell("+1"), "'+1");
    assert_eq!(sanitize_cell("-5"), "'-5");
    assert_eq!(sanitize_cell("@cmd"), "'@cmd");
}

#[test]
fn test_sanitize_leaves_plain_text() {
    assert_eq!(sanitize_cell(""), "");
    assert_eq!(sanitize_cell("Apollo"), "Apollo");
    assert_eq!(sanitize_cell("a=b"), "a=b");
    assert_eq!(sanitize_cell(" =x"), " =x");
}

#[test]
fn test_distinct_keeps_first_seen_order() {
    let values = ["b", "a", "", "b", "c", "a"];
    assert_eq!(distinct(values), vec!["b", "a", "c"]);
}

#[test]
fn test_secs2readable() {
    assert_eq!(secs2readable(0), "00:00");
    assert_eq!(secs2readable(5400), "01:30");
    assert_eq!(secs2readable(100 * 3600), "100:00");
}

#[test]
fn test_path_helpers() {
    assert_eq!(safe_filename("my report (1).csv"), "my_report__1_.csv");
    assert_eq!(extension("Export.CSV").as_deref(), Some("csv"));
    assert_eq!(extension("noext"), None);
    assert_eq!(extension("trailing."), None);
}

#[test]
fn test_table_render_aligns_columns() {
    let mut t = Table::new(vec!["User", "Total"]);
    t.add_row(vec!["Alice".to_string(), "03:00".to_string()]);
    t.add_row(vec!["Bo".to_string(), "10:30".to_string()]);

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "User  Total");
    assert_eq!(lines[1], "----- -----");
    assert_eq!(lines[2], "Alice 03:00");
    assert_eq!(lines[3], "Bo    10:30");
}
