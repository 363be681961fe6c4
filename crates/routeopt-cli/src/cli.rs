//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use routeopt_types::OutputFormat;

#[derive(Parser)]
#[command(name = "routeopt")]
#[command(version)]
#[command(about = "Distribution center assignment for delivery zones")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Center catalog TOML file. Uses config value or the built-in catalog
    /// if not specified.
    #[arg(long, global = true)]
    pub centers: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the optimal assignment for a zones CSV
    Assign {
        /// Path to zones CSV. Uses config value if not specified.
        #[arg(long)]
        zones: Option<PathBuf>,
    },

    /// List the active distribution center catalog
    Centers,

    /// Compute the assignment and export it to an Excel workbook
    Export {
        /// Path to zones CSV. Uses config value if not specified.
        #[arg(long)]
        zones: Option<PathBuf>,

        /// Output .xlsx path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Show resolved configuration
    Config,
}
