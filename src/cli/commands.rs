//! CLI command implementations
//!
//! `serve` loads the JSON config (every field has a default; DATABASE_URL
//! from the environment overrides the file), opens the pool, and runs the
//! HTTP server on a tokio runtime. `validate` is a one-shot offline run of
//! the schema validator, exiting non-zero when the schema has errors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gateway::GatewayConfig;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::schema::{validate, TableDefinition};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Load configuration. A missing file is not an error: defaults apply,
    /// which suits container deployments configured purely by environment.
    pub fn load(path: &Path) -> CliResult<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        } else {
            AppConfig::default()
        };

        // Environment wins over the file for the connection URL.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.gateway.database_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.gateway.database_url.is_empty() {
            return Err(CliError::config_error(
                "No database URL configured. Set DATABASE_URL or gateway.database_url.",
            ));
        }
        if self.gateway.statement_timeout_ms == 0 {
            return Err(CliError::config_error("statement_timeout_ms must be > 0"));
        }
        Ok(())
    }
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Validate { file } => validate_file(&file),
    }
}

fn serve(config_path: &Path) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sqlcoach=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load(config_path)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let pool = config.gateway.connect().await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(
            max_connections = config.gateway.max_connections,
            statement_timeout_ms = config.gateway.statement_timeout_ms,
            "connected to playground database"
        );

        let server = HttpServer::new(config.http, &config.gateway, pool);
        server.start().await?;
        Ok(())
    })
}

fn validate_file(file: &Path) -> CliResult<()> {
    let content = fs::read_to_string(file)?;
    let tables: Vec<TableDefinition> = serde_json::from_str(&content)?;

    let result = validate(&tables);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.is_valid {
        Ok(())
    } else {
        Err(CliError::SchemaInvalid {
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        })
    }
}
