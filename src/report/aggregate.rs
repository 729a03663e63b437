// src/report/aggregate.rs

use crate::models::{OutputFormat, TimeEntry};
use crate::report::calendar::CalendarRange;
pub use crate::utils::date::UNKNOWN_DAY;
use crate::utils::formatting::distinct;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Billable state of the entries logged on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillableStatus {
    Empty,
    Yes,
    No,
    Mixed,
}

impl BillableStatus {
    fn from_entries(entries: &[&TimeEntry]) -> Self {
        let billable = entries.iter().filter(|e| e.is_billable()).count();
        match (entries.len(), billable) {
            (0, _) => BillableStatus::Empty,
            (n, b) if n == b => BillableStatus::Yes,
            (_, 0) => BillableStatus::No,
            _ => BillableStatus::Mixed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillableStatus::Empty => "",
            BillableStatus::Yes => "Yes",
            BillableStatus::No => "No",
            BillableStatus::Mixed => "Mixed",
        }
    }
}

/// One row of a user block.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    /// `None` for the Unknown bucket.
    pub date: Option<NaiveDate>,
    pub label: String,
    /// Sum of the entries' formatted durations.
    pub duration: f64,
    pub seconds: i64,
    pub entry_count: usize,
    pub projects: Vec<String>,
    pub descriptions: Vec<String>,
    pub billable: BillableStatus,
}

impl DayRow {
    fn build(
        date: Option<NaiveDate>,
        label: String,
        entries: &[&TimeEntry],
        format: OutputFormat,
    ) -> Self {
        Self {
            date,
            label,
            duration: entries.iter().map(|e| e.formatted_duration(format)).sum(),
            seconds: saturating_sum(entries.iter().map(|e| e.rounded_seconds)),
            entry_count: entries.len(),
            projects: owned(distinct(entries.iter().map(|e| e.project.as_str()))),
            descriptions: owned(distinct(entries.iter().map(|e| e.description.as_str()))),
            billable: BillableStatus::from_entries(entries),
        }
    }
}

/// Day-by-day breakdown for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBlock {
    pub user: String,
    pub days: Vec<DayRow>,
    pub total: f64,
    pub total_seconds: i64,
}

/// Group entries by user (first-seen order), then by day over the whole
/// calendar range. Days without entries are zero rows. Entries without a
/// parsed date end up in a trailing Unknown row for that user.
pub fn aggregate(
    entries: &[TimeEntry],
    calendar: &CalendarRange,
    format: OutputFormat,
) -> Vec<UserBlock> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_user: HashMap<&str, HashMap<Option<NaiveDate>, Vec<&TimeEntry>>> = HashMap::new();

    for e in entries {
        if !by_user.contains_key(e.user.as_str()) {
            order.push(e.user.as_str());
        }
        by_user
            .entry(e.user.as_str())
            .or_default()
            .entry(e.parsed_date)
            .or_default()
            .push(e);
    }

    order
        .into_iter()
        .map(|user| {
            let groups = by_user.remove(user).unwrap_or_default();

            let mut days: Vec<DayRow> = calendar
                .days
                .iter()
                .zip(calendar.labels())
                .map(|(d, label)| {
                    let group = groups.get(&Some(*d)).map(Vec::as_slice).unwrap_or(&[]);
                    DayRow::build(Some(*d), label, group, format)
                })
                .collect();

            if let Some(unknown) = groups.get(&None) {
                days.push(DayRow::build(None, UNKNOWN_DAY.to_string(), unknown, format));
            }

            UserBlock {
                user: user.to_string(),
                total: days.iter().map(|d| d.duration).sum(),
                total_seconds: saturating_sum(days.iter().map(|d| d.seconds)),
                days,
            }
        })
        .collect()
}

/// Durations are unbounded, so second counts clamp instead of overflowing.
fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
