use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::report::{ReportDriver, Upload};
use std::path::Path;

/// Handle the `preview` command: print the preview payload as JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { file } = cmd {
        let upload = Upload::from_path(Path::new(file), cfg.max_upload_bytes)?;
        let preview = ReportDriver::new(cfg.max_upload_bytes).preview(&upload)?;
        println!("{}", serde_json::to_string_pretty(&preview)?);
    }
    Ok(())
}
