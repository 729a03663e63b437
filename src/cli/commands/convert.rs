use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::report::{ReportArtifact, ReportDriver, ReportFilters, ReportRequest, Upload};
use crate::ui::messages::{info, success};
use crate::utils::formatting::secs2readable;
use crate::utils::fs_utils::{ensure_writable, write_artifact};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use std::path::Path;

/// Handle the `convert` command: build the report and save it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        file,
        schema,
        format,
        projects,
        clients,
        users,
        out,
        force,
    } = cmd
    {
        let upload = Upload::from_path(Path::new(file), cfg.max_upload_bytes)?;

        let request = ReportRequest {
            schema: schema.unwrap_or(cfg.default_schema),
            format: format.unwrap_or(cfg.default_format),
            filters: ReportFilters {
                projects: projects.clone(),
                clients: clients.clone(),
                users: users.clone(),
            },
            identity: cfg.identity(),
        };

        info(format!(
            "Converting {} ({} schema, {} format)",
            upload.display_name(),
            request.schema.key(),
            request.format.key()
        ));

        let artifact = ReportDriver::new(cfg.max_upload_bytes).generate(&upload, &request)?;

        let dir = match out {
            Some(d) => expand_tilde(d),
            None => cfg.output_dir(),
        };
        let path = dir.join(&artifact.filename);

        ensure_writable(&path, *force)?;
        write_artifact(&path, &artifact.bytes)?;

        print_summary(&artifact);
        success(format!("Report saved: {}", path.display()));
    }
    Ok(())
}

fn print_summary(artifact: &ReportArtifact) {
    info(format!("Period:    {}", artifact.period));
    info(format!("Projects:  {}", artifact.projects_summary()));
    info(format!("Customers: {}", artifact.customers_summary()));

    let mut table = Table::new(vec!["User", "Days", "Total"]);
    for block in &artifact.users {
        table.add_row(vec![
            block.user.clone(),
            block.days.len().to_string(),
            secs2readable(block.total_seconds),
        ]);
    }
    print!("{}", table.render());
}
