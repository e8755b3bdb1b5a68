//! sqlcoach CLI entry point
//!
//! Minimal entrypoint: parse arguments, dispatch to a CLI command, print
//! errors to stderr, exit non-zero on failure. All logic lives in the CLI
//! module.

use sqlcoach::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
