use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ReportSchema;
use crate::ui::messages::header;
use crate::utils::table::Table;

/// Handle the `schemas` command: list layouts and their columns.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schemas = cmd {
        header("Report schemas");

        let mut table = Table::new(vec!["Key", "Name", "Columns", "Description"]);
        for schema in ReportSchema::ALL {
            let marker = if schema == cfg.default_schema { " *" } else { "" };
            let columns: Vec<&str> = schema.visible_columns().iter().map(|c| c.title()).collect();
            table.add_row(vec![
                format!("{}{marker}", schema.key()),
                schema.name().to_string(),
                columns.join(", "),
                schema.description().to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
