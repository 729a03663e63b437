//! Unified application error type.
//! All modules (report, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input / upload validation
    // ---------------------------
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Upload too large: {size} bytes (maximum is {max} bytes)")]
    UploadTooLarge { size: usize, max: usize },

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Unknown report schema: {0}")]
    InvalidSchema(String),

    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),

    // ---------------------------
    // Parsing / rendering
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Processing error: {0}")]
    Processing(String),
}

impl AppError {
    /// True for failures the caller can fix by correcting the input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidUpload(_)
                | AppError::UploadTooLarge { .. }
                | AppError::MissingColumns(_)
                | AppError::InvalidSchema(_)
                | AppError::InvalidOutputFormat(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
