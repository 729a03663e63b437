use crate::models::OutputFormat;
use crate::utils::date::parse_start_date;
use crate::utils::duration::{round_to_nearest_minute, try_parse_duration};
use chrono::NaiveDate;
use serde::Serialize;

/// One CSV row after defaulting, plus the fields derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub project: String,
    pub client: String,
    pub user: String,
    pub start_date: String,
    pub duration: String,
    pub billable: String,
    pub description: String,

    pub raw_seconds: i64,
    pub rounded_seconds: i64,
    /// Duration text did not match `H:M:S` and was counted as zero.
    pub malformed_duration: bool,
    pub parsed_date: Option<NaiveDate>,
}

impl TimeEntry {
    pub fn new(
        project: String,
        client: String,
        user: String,
        start_date: String,
        duration: String,
        billable: String,
        description: String,
    ) -> Self {
        let parsed = try_parse_duration(&duration);
        let raw_seconds = parsed.unwrap_or(0);
        let parsed_date = parse_start_date(&start_date);
        Self {
            project,
            client,
            user,
            start_date,
            duration,
            billable,
            description,
            raw_seconds,
            rounded_seconds: round_to_nearest_minute(raw_seconds),
            malformed_duration: parsed.is_none(),
            parsed_date,
        }
    }

    pub fn formatted_duration(&self, format: OutputFormat) -> f64 {
        format.convert(self.rounded_seconds)
    }

    pub fn is_billable(&self) -> bool {
        matches!(
            self.billable.trim().to_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        )
    }
}
