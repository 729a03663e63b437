use chrono::{Datelike, NaiveDate};

/// Day label used for entries whose start date does not parse.
pub const UNKNOWN_DAY: &str = "Unknown";

/// Format of the `Start Date` column.
pub const START_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` start date; `None` if it does not parse.
/// chrono's `%Y` takes any digit count, so the year must have exactly four.
pub fn parse_start_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let year = s.rsplit('/').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, START_DATE_FORMAT).ok()
}

/// `"05 (Monday)"`
pub fn day_label(d: NaiveDate) -> String {
    d.format("%d (%A)").to_string()
}

/// `"March 2025"`
pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

/// Every day from `start` to `end`, both included.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
