//! Query gateway for the SQL playground
//!
//! Sits between the HTTP layer and the external Postgres instance that holds
//! the practice datasets. Responsibilities, in order:
//!
//! 1. Statically reject write statements by leading keyword ([`policy`]) —
//!    no database round-trip for those.
//! 2. Run permitted queries on a pooled connection with a server-side
//!    statement timeout set first.
//! 3. On failure, route the raw engine error through the classifier so the
//!    learner gets an explanation rather than a SQLSTATE.
//!
//! The gateway performs no retries; every failure is classified and
//! returned to the caller once.

pub mod config;
pub mod executor;
pub mod policy;

pub use config::{GatewayConfig, PoolError};
pub use executor::{GatewayError, QueryGateway, QueryResult};
pub use policy::is_forbidden_statement;
