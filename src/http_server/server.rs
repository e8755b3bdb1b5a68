//! # HTTP Server
//!
//! Assembles the area routers into one axum application with CORS and
//! request tracing, and runs it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::content::ContentStore;
use crate::gateway::{GatewayConfig, QueryGateway};

use super::config::HttpServerConfig;
use super::content_routes::{content_routes, ContentState};
use super::observability_routes::health_routes;
use super::query_routes::{query_routes, QueryState};
use super::schema_routes::schema_routes;

/// HTTP server for the sqlcoach API.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from its config and an open pool to the playground
    /// database.
    pub fn new(config: HttpServerConfig, gateway_config: &GatewayConfig, pool: PgPool) -> Self {
        let router = Self::build_router(&config, gateway_config, pool);
        Self { config, router }
    }

    /// Build the combined router with all endpoints.
    fn build_router(
        config: &HttpServerConfig,
        gateway_config: &GatewayConfig,
        pool: PgPool,
    ) -> Router {
        let query_state = Arc::new(QueryState::new(QueryGateway::new(
            pool.clone(),
            gateway_config.statement_timeout_ms,
        )));
        let content_state = Arc::new(ContentState::new(ContentStore::new(pool)));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(content_routes(content_state))
            .nest("/query", query_routes(query_state))
            .nest("/schema", schema_routes())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Socket address the server will bind to.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Take the router (for testing with `tower::ServiceExt`).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        tracing::info!("sqlcoach API listening on http://{}", addr);
        tracing::info!("  POST /query/execute   - playground query execution");
        tracing::info!("  POST /schema/validate - schema design feedback");
        tracing::info!("  GET  /learning-paths  - curriculum content");
        tracing::info!("  GET  /scenarios       - practice scenarios");
        tracing::info!("  GET  /health          - health check");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
