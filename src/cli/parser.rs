use crate::models::{OutputFormat, ReportSchema};
use clap::{Parser, Subcommand};

/// Command-line interface definition for tsreport
/// CLI application turning time-tracking CSV exports into XLSX reports
#[derive(Parser)]
#[command(
    name = "tsreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a time-tracking CSV export into a per-user daily XLSX timesheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the available report schemas
    Schemas,

    /// Show columns, sample rows and distinct project/client/user values
    Preview {
        /// CSV file to inspect
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Build the XLSX report from a CSV export
    Convert {
        /// CSV file exported by the time tracker
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Report layout (defaults to the configured schema)
        #[arg(long, value_enum)]
        schema: Option<ReportSchema>,

        /// Duration format: decimal hours or [h]:mm
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Only include these projects (repeatable)
        #[arg(long = "project", value_name = "NAME")]
        projects: Vec<String>,

        /// Only include these clients (repeatable)
        #[arg(long = "client", value_name = "NAME")]
        clients: Vec<String>,

        /// Only include these users (repeatable)
        #[arg(long = "user", value_name = "NAME")]
        users: Vec<String>,

        /// Output directory (defaults to the configured one)
        #[arg(long, value_name = "DIR")]
        out: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
