//! tsreport library root.
//! Exposes the CLI parser, the high-level run() function and the report
//! pipeline (upload → entries → filters → calendar → aggregation → XLSX).

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Schemas => cli::commands::schemas::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ init does not need an existing config
    if let Commands::Init { .. } = cli.command {
        return dispatch(&cli, &Config::default());
    }

    // 3️⃣ load config once (file path overridable with --config)
    let cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    dispatch(&cli, &cfg)
}
