pub mod identity;
pub mod output_format;
pub mod schema;
pub mod time_entry;

pub use identity::{Identity, Logo};
pub use output_format::OutputFormat;
pub use schema::{ReportColumn, ReportSchema};
pub use time_entry::TimeEntry;
