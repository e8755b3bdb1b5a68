//! CLI argument definitions using clap
//!
//! Commands:
//! - sqlcoach serve --config <path>
//! - sqlcoach validate --file <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sqlcoach - backend for an interactive SQL-learning platform
#[derive(Parser, Debug)]
#[command(name = "sqlcoach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Path to configuration file (optional; defaults apply when absent)
        #[arg(long, default_value = "./sqlcoach.json")]
        config: PathBuf,
    },

    /// Validate a schema file and print the diagnostics as JSON
    Validate {
        /// Path to a JSON file holding an array of table definitions
        #[arg(long)]
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
