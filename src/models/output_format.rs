use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How durations are written into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Decimal hours, two decimals (e.g. 1.25)
    #[default]
    Decimal,
    /// Fraction of a day shown as `[h]:mm`
    Hours,
}

impl OutputFormat {
    pub fn key(&self) -> &'static str {
        match self {
            OutputFormat::Decimal => "decimal",
            OutputFormat::Hours => "hours",
        }
    }

    pub fn from_key(key: &str) -> AppResult<Self> {
        match key.trim().to_lowercase().as_str() {
            "decimal" => Ok(OutputFormat::Decimal),
            "hours" => Ok(OutputFormat::Hours),
            other => Err(AppError::InvalidOutputFormat(other.to_string())),
        }
    }

    /// Excel number format used for duration cells.
    pub fn num_format(&self) -> &'static str {
        match self {
            OutputFormat::Decimal => "0.00",
            OutputFormat::Hours => "[h]:mm",
        }
    }

    /// Convert minute-aligned seconds into the value stored in the cell.
    pub fn convert(&self, rounded_seconds: i64) -> f64 {
        match self {
            OutputFormat::Decimal => round2(rounded_seconds as f64 / 3600.0),
            OutputFormat::Hours => rounded_seconds as f64 / 86400.0,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
