// src/report/mod.rs

pub mod aggregate;
pub mod calendar;
pub mod dataset;
pub mod driver;
pub mod filter;
pub mod preview;
pub mod render;
pub mod upload;

pub use driver::{ReportArtifact, ReportDriver, ReportRequest, report_filename};
pub use filter::ReportFilters;
pub use preview::Preview;
pub use upload::Upload;
