use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        info("Initializing tsreport…");
        let path = Config::init_all(cli.config.as_deref().map(Path::new), *force)?;
        info(format!(
            "Edit {} to set your name or company and logo.",
            path.display()
        ));
    }
    Ok(())
}
