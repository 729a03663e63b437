//! Formatting utilities used for CLI and report outputs.

/// Characters that make a spreadsheet treat a cell as a formula.
const FORMULA_TRIGGERS: [char; 4] = ['=', '+', '-', '@'];

/// Prefix that forces spreadsheet applications to read the cell as text.
pub const TEXT_MARKER: char = '\'';

/// Neutralise formula injection in text cells coming from the CSV.
pub fn sanitize_cell(value: &str) -> String {
    match value.chars().next() {
        Some(c) if FORMULA_TRIGGERS.contains(&c) => format!("{TEXT_MARKER}{value}"),
        _ => value.to_string(),
    }
}

/// Distinct non-empty values in first-seen order.
pub fn distinct<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !v.trim().is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// `5400` -> `"01:30"`
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let mins = secs.abs() / 60;
    format!("{}{:02}:{:02}", sign, mins / 60, mins % 60)
}
