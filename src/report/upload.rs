// src/report/upload.rs

use crate::errors::{AppError, AppResult};
use crate::utils::path::{extension, safe_filename};
use std::fs;
use std::path::Path;

const ALLOWED_EXTENSIONS: [&str; 1] = ["csv"];

/// Upload cap used when the caller does not configure one (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Raw CSV upload as handed over by the caller.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read an upload from disk, refusing files larger than `max_bytes`
    /// before loading them.
    pub fn from_path(path: &Path, max_bytes: usize) -> AppResult<Self> {
        if !path.is_file() {
            return Err(AppError::InvalidUpload(format!(
                "no file supplied at {}",
                path.display()
            )));
        }

        let size = fs::metadata(path)?.len() as usize;
        if size > max_bytes {
            return Err(AppError::UploadTooLarge {
                size,
                max: max_bytes,
            });
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::new(filename, fs::read(path)?))
    }

    /// Sanitised name, safe to show in messages.
    pub fn display_name(&self) -> String {
        safe_filename(&self.filename)
    }

    /// Structural checks done before any parsing.
    pub fn validate(&self, max_bytes: usize) -> AppResult<()> {
        if self.filename.trim().is_empty() && self.bytes.is_empty() {
            return Err(AppError::InvalidUpload("no file supplied".into()));
        }

        match extension(&self.filename) {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(AppError::InvalidUpload(format!(
                    "'{}' is not a CSV file",
                    self.display_name()
                )));
            }
        }

        if self.bytes.is_empty() {
            return Err(AppError::InvalidUpload(format!(
                "'{}' is empty",
                self.display_name()
            )));
        }

        if self.bytes.len() > max_bytes {
            return Err(AppError::UploadTooLarge {
                size: self.bytes.len(),
                max: max_bytes,
            });
        }

        Ok(())
    }
}
