//! CLI module for sqlcoach
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP API
//! - validate: one-shot schema validation of a JSON file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, AppConfig};
pub use errors::{CliError, CliResult};
