// src/report/calendar.rs

use crate::models::TimeEntry;
use crate::utils::date::{day_label, days_between, month_label, same_month};
use chrono::NaiveDate;
use std::fmt;

/// Anchor used when no entry carries a parseable date.
pub fn fallback_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Gap-free sequence of days between the earliest and latest parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRange {
    pub days: Vec<NaiveDate>,
}

impl CalendarRange {
    pub fn reconcile(entries: &[TimeEntry]) -> Self {
        match date_bounds(entries) {
            Some((min, max)) => Self {
                days: days_between(min, max),
            },
            None => Self {
                days: vec![fallback_day()],
            },
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.days.iter().map(|d| day_label(*d)).collect()
    }
}

/// Earliest and latest parsed date, ignoring unparseable ones.
pub fn date_bounds(entries: &[TimeEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = entries.iter().filter_map(|e| e.parsed_date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

/// Period covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Month(NaiveDate),
    Range(NaiveDate, NaiveDate),
    AllData,
}

impl ReportPeriod {
    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        match date_bounds(entries) {
            Some((min, max)) if same_month(min, max) => ReportPeriod::Month(min),
            Some((min, max)) => ReportPeriod::Range(min, max),
            None => ReportPeriod::AllData,
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportPeriod::Month(d) => write!(f, "{}", month_label(*d)),
            ReportPeriod::Range(a, b) => write!(f, "{} - {}", month_label(*a), month_label(*b)),
            ReportPeriod::AllData => write!(f, "All Data"),
        }
    }
}
