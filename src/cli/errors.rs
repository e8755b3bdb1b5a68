//! CLI error types

use crate::gateway::PoolError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Pool(#[from] PoolError),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid schema file: {0}")]
    SchemaFile(#[from] serde_json::Error),

    #[error("Schema is invalid: {errors} error(s), {warnings} warning(s)")]
    SchemaInvalid { errors: usize, warnings: usize },
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }
}
