// src/report/driver.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Identity, OutputFormat, ReportSchema, TimeEntry};
use crate::report::aggregate::{UserBlock, aggregate};
use crate::report::calendar::{CalendarRange, ReportPeriod};
use crate::report::dataset::RawTable;
use crate::report::filter::ReportFilters;
use crate::report::preview::Preview;
use crate::report::render::{ReportHeader, render_report};
use crate::report::upload::{DEFAULT_MAX_UPLOAD_BYTES, Upload};
use crate::ui::messages::{error, warning};
use crate::utils::formatting::distinct;
use chrono::NaiveDateTime;

/// What to build and for whom.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub schema: ReportSchema,
    pub format: OutputFormat,
    pub filters: ReportFilters,
    pub identity: Identity,
}

/// Finished spreadsheet plus the metadata shown alongside it.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub period: String,
    pub projects: Vec<String>,
    pub customers: Vec<String>,
    pub users: Vec<UserBlock>,
    pub entry_count: usize,
    pub skipped_rows: usize,
    pub malformed_durations: usize,
    pub unknown_dates: usize,
}

impl ReportArtifact {
    /// Comma-joined project names, first-seen order.
    pub fn projects_summary(&self) -> String {
        self.projects.join(", ")
    }

    pub fn customers_summary(&self) -> String {
        self.customers.join(", ")
    }
}

/// `Report_20250314_093005.xlsx`
pub fn report_filename(at: NaiveDateTime) -> String {
    format!("Report_{}.xlsx", at.format("%Y%m%d_%H%M%S"))
}

/// Orchestrates validation, filtering, aggregation and rendering.
pub struct ReportDriver {
    max_upload_bytes: usize,
}

impl Default for ReportDriver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl ReportDriver {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self { max_upload_bytes }
    }

    pub fn preview(&self, upload: &Upload) -> AppResult<Preview> {
        upload.validate(self.max_upload_bytes)?;
        let table = RawTable::from_upload(upload)?;
        Ok(Preview::from_table(&table))
    }

    /// Generate a report stamped with the current local time.
    pub fn generate(&self, upload: &Upload, request: &ReportRequest) -> AppResult<ReportArtifact> {
        self.generate_at(upload, request, chrono::Local::now().naive_local())
    }

    /// Validation failures are returned as they are. Anything else is
    /// reported in full here and handed back as a generic failure.
    pub fn generate_at(
        &self,
        upload: &Upload,
        request: &ReportRequest,
        at: NaiveDateTime,
    ) -> AppResult<ReportArtifact> {
        match self.build(upload, request, at) {
            Ok(artifact) => Ok(artifact),
            Err(e) if e.is_validation() => Err(e),
            Err(e) => {
                error(format!(
                    "Report generation failed for '{}': {e} ({e:?})",
                    upload.display_name()
                ));
                Err(AppError::Processing("report generation failed".into()))
            }
        }
    }

    fn build(
        &self,
        upload: &Upload,
        request: &ReportRequest,
        at: NaiveDateTime,
    ) -> AppResult<ReportArtifact> {
        upload.validate(self.max_upload_bytes)?;

        let ingested = RawTable::from_upload(upload)?.into_entries()?;
        let entries = request.filters.apply(ingested.entries);

        let malformed_durations = entries.iter().filter(|e| e.malformed_duration).count();
        let unknown_dates = entries.iter().filter(|e| e.parsed_date.is_none()).count();
        report_row_issues(ingested.skipped_rows, malformed_durations, unknown_dates);

        let projects = distinct_owned(&entries, |e| &e.project);
        let customers = distinct_owned(&entries, |e| &e.client);
        let period = ReportPeriod::from_entries(&entries).to_string();

        let calendar = CalendarRange::reconcile(&entries);
        let users = aggregate(&entries, &calendar, request.format);

        let header = ReportHeader {
            identity: &request.identity,
            projects: &projects,
            customers: &customers,
            period: &period,
        };
        let bytes = render_report(request.schema, request.format, &header, &users)?;

        Ok(ReportArtifact {
            bytes,
            filename: report_filename(at),
            period,
            projects,
            customers,
            users,
            entry_count: entries.len(),
            skipped_rows: ingested.skipped_rows,
            malformed_durations,
            unknown_dates,
        })
    }
}

fn distinct_owned<F>(entries: &[TimeEntry], field: F) -> Vec<String>
where
    F: Fn(&TimeEntry) -> &String,
{
    distinct(entries.iter().map(|e| field(e).as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn report_row_issues(skipped: usize, malformed: usize, unknown: usize) {
    if skipped > 0 {
        warning(format!("{skipped} row(s) skipped: the User value was blank"));
    }
    if malformed > 0 {
        warning(format!(
            "{malformed} duration value(s) not in H:M:S form, counted as 0"
        ));
    }
    if unknown > 0 {
        warning(format!(
            "{unknown} row(s) with an unreadable Start Date, listed under 'Unknown'"
        ));
    }
}
