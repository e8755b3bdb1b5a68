//! # sqlcoach HTTP server
//!
//! Axum server exposing the learning platform's API:
//!
//! - `GET /health` - liveness check
//! - `POST /query/execute` - sandboxed playground query execution
//! - `POST /schema/validate` - schema designer feedback
//! - `GET /learning-paths`, `/scenarios`, ... - curriculum content reads
//!
//! Each area lives in its own `*_routes.rs` file exposing a `Router`
//! constructor; `server.rs` assembles them with CORS and request tracing.

pub mod config;
pub mod content_routes;
pub mod observability_routes;
pub mod query_routes;
pub mod schema_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
