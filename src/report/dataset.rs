// src/report/dataset.rs

use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::report::upload::Upload;
use csv::{ReaderBuilder, StringRecord};

pub const COL_PROJECT: &str = "Project";
pub const COL_CLIENT: &str = "Client";
pub const COL_USER: &str = "User";
pub const COL_START_DATE: &str = "Start Date";
pub const COL_DURATION: &str = "Duration (h)";
pub const COL_BILLABLE: &str = "Billable";
pub const COL_DESCRIPTION: &str = "Description";

/// Column declaration: required columns must be present in the header,
/// optional ones are filled with `default` when absent.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub required: bool,
    /// Value used for absent columns and blank cells. `None` means the row
    /// is unusable without it (a blank `User` cannot be attributed).
    pub default: Option<&'static str>,
}

pub const COLUMN_SPECS: [ColumnSpec; 7] = [
    ColumnSpec {
        name: COL_PROJECT,
        required: true,
        default: Some(""),
    },
    ColumnSpec {
        name: COL_CLIENT,
        required: true,
        default: Some(""),
    },
    ColumnSpec {
        name: COL_USER,
        required: true,
        default: None,
    },
    ColumnSpec {
        name: COL_START_DATE,
        required: true,
        default: Some(""),
    },
    ColumnSpec {
        name: COL_DURATION,
        required: true,
        default: Some("00:00:00"),
    },
    ColumnSpec {
        name: COL_BILLABLE,
        required: false,
        default: Some("No"),
    },
    ColumnSpec {
        name: COL_DESCRIPTION,
        required: false,
        default: Some(""),
    },
];

/// CSV content as read, before validation.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

/// Result of turning a validated table into time entries.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub entries: Vec<TimeEntry>,
    /// Rows dropped because their `User` cell was blank.
    pub skipped_rows: usize,
}

impl RawTable {
    pub fn from_upload(upload: &Upload) -> AppResult<Self> {
        Self::from_bytes(&upload.bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| AppError::InvalidUpload(format!("not a valid CSV file: {e}")))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(record?);
        }

        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value; short rows read as blank.
    pub fn cell<'a>(&self, row: &'a StringRecord, col: usize) -> &'a str {
        row.get(col).unwrap_or("")
    }

    /// Required columns absent from the header, in declaration order.
    pub fn missing_columns(&self) -> Vec<String> {
        COLUMN_SPECS
            .iter()
            .filter(|spec| spec.required && self.column_index(spec.name).is_none())
            .map(|spec| spec.name.to_string())
            .collect()
    }

    /// Fail with every missing required column named.
    pub fn validate(&self) -> AppResult<()> {
        let missing = self.missing_columns();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingColumns(missing))
        }
    }

    /// Validate, apply defaults and build one entry per usable row.
    pub fn into_entries(self) -> AppResult<Ingested> {
        self.validate()?;

        let indexes: Vec<Option<usize>> = COLUMN_SPECS
            .iter()
            .map(|spec| self.column_index(spec.name))
            .collect();

        let mut out = Ingested::default();

        'rows: for row in &self.rows {
            let mut values: Vec<String> = Vec::with_capacity(COLUMN_SPECS.len());

            for (spec, idx) in COLUMN_SPECS.iter().zip(&indexes) {
                let raw = idx.map(|i| self.cell(row, i)).unwrap_or("");
                let value = if raw.trim().is_empty() {
                    match spec.default {
                        Some(d) => d,
                        None => {
                            out.skipped_rows += 1;
                            continue 'rows;
                        }
                    }
                } else {
                    raw
                };
                values.push(value.to_string());
            }

            let mut it = values.into_iter();
            let mut next = || it.next().unwrap_or_default();
            out.entries.push(TimeEntry::new(
                next(),
                next(),
                next(),
                next(),
                next(),
                next(),
                next(),
            ));
        }

        Ok(out)
    }
}
