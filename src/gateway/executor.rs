//! Query execution against the playground database
//!
//! A permitted query runs on one connection checked out from the pool, with
//! the server-side statement timeout set first. The checked-out connection
//! goes back to the pool when its guard drops, on success and failure alike,
//! so no error path can leak a connection.

use std::time::Instant;

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo};

use crate::classifier::{classify, QueryErrorResponse, RawSqlError};

use super::policy;

/// Result of a successful playground query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Value>,
    pub row_count: usize,
    /// Wall-clock time spent executing, in milliseconds.
    pub execution_time: u64,
}

/// A rejected or failed query, carrying the learner-facing explanation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Statement refused by the read-only policy; the database was never
    /// contacted. Maps to HTTP 403.
    #[error("statement rejected by playground policy")]
    Forbidden(QueryErrorResponse),

    /// The engine reported a failure, or it could not be reached. Maps to
    /// HTTP 400.
    #[error("query execution failed ({})", .0.code)]
    Execution(QueryErrorResponse),
}

impl GatewayError {
    /// The response body for this failure.
    pub fn into_response(self) -> QueryErrorResponse {
        match self {
            GatewayError::Forbidden(resp) | GatewayError::Execution(resp) => resp,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, GatewayError::Forbidden(_))
    }
}

/// Gateway to the external Postgres instance holding the practice datasets.
pub struct QueryGateway {
    pool: PgPool,
    statement_timeout_ms: u64,
}

impl QueryGateway {
    pub fn new(pool: PgPool, statement_timeout_ms: u64) -> Self {
        Self {
            pool,
            statement_timeout_ms,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Execute one playground query.
    ///
    /// Forbidden statements are rejected synchronously without touching the
    /// pool. Engine failures (including statement-timeout expiry, which
    /// Postgres reports as a query error) come back classified. No retries.
    pub async fn execute(&self, query: &str) -> Result<QueryResult, GatewayError> {
        if policy::is_forbidden_statement(query) {
            return Err(GatewayError::Forbidden(
                QueryErrorResponse::forbidden_operation(),
            ));
        }

        let started = Instant::now();

        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        sqlx::query(&format!(
            "SET statement_timeout = {}",
            self.statement_timeout_ms
        ))
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

        let rows = sqlx::query(query)
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        let execution_time = started.elapsed().as_millis() as u64;

        let columns: Vec<String> = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let rows: Vec<Value> = rows.iter().map(|row| Value::Object(row_to_json(row))).collect();

        Ok(QueryResult {
            columns,
            row_count: rows.len(),
            rows,
            execution_time,
        })
    }
}

/// Engine-reported failures go through the classifier; anything below the
/// protocol level (pool exhaustion, IO, TLS) is a connectivity failure the
/// learner's query did not cause.
fn map_sqlx_error(err: sqlx::Error) -> GatewayError {
    match err {
        sqlx::Error::Database(db) => {
            let raw = RawSqlError::new(db.code().map(|c| c.to_string()), db.message());
            GatewayError::Execution(classify(&raw))
        }
        other => {
            tracing::warn!(error = %other, "playground database unreachable");
            GatewayError::Execution(QueryErrorResponse::network_error())
        }
    }
}

fn row_to_json(row: &PgRow) -> Map<String, Value> {
    let mut obj = Map::new();
    for (idx, col) in row.columns().iter().enumerate() {
        obj.insert(
            col.name().to_string(),
            decode_column(row, idx, col.type_info().name()),
        );
    }
    obj
}

/// Convert one column of a dynamically-typed row to JSON, keyed on the
/// Postgres type name. Types outside the playground's designer set decode
/// to null rather than failing the whole result.
fn decode_column(row: &PgRow, idx: usize, type_name: &str) -> Value {
    match type_name {
        "BOOL" => row
            .try_get::<Option<bool>, _>(idx)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        "INT2" => int_value(row.try_get::<Option<i16>, _>(idx).ok().flatten().map(i64::from)),
        "INT4" => int_value(row.try_get::<Option<i32>, _>(idx).ok().flatten().map(i64::from)),
        "INT8" => int_value(row.try_get::<Option<i64>, _>(idx).ok().flatten()),
        "FLOAT4" => float_value(row.try_get::<Option<f32>, _>(idx).ok().flatten().map(f64::from)),
        "FLOAT8" => float_value(row.try_get::<Option<f64>, _>(idx).ok().flatten()),
        // Kept as a string to avoid losing precision, matching how the
        // original playground surfaced NUMERIC values.
        "NUMERIC" => row
            .try_get::<Option<rust_decimal::Decimal>, _>(idx)
            .ok()
            .flatten()
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(idx)
            .ok()
            .flatten()
            .unwrap_or(Value::Null),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(idx)
            .ok()
            .flatten()
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(idx)
            .ok()
            .flatten()
            .map(|t| Value::String(t.to_string()))
            .unwrap_or(Value::Null),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx)
            .ok()
            .flatten()
            .map(|t| Value::String(t.to_rfc3339()))
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn int_value(v: Option<i64>) -> Value {
    v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null)
}

fn float_value(v: Option<f64>) -> Value {
    v.and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayConfig;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_gateway() -> QueryGateway {
        // connect_lazy never touches the network, so policy-only tests run
        // without a database.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://sqlcoach@localhost/sqlcoach")
            .unwrap();
        QueryGateway::new(pool, 5000)
    }

    #[tokio::test]
    async fn test_forbidden_statement_never_reaches_the_pool() {
        let gateway = lazy_gateway();

        let err = gateway.execute("DROP TABLE users;").await.unwrap_err();
        assert!(err.is_forbidden());

        let resp = err.into_response();
        assert_eq!(resp.code, "FORBIDDEN_OPERATION");
    }

    #[tokio::test]
    async fn test_unreachable_database_is_a_network_error() {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://nobody@127.0.0.1:1/nowhere")
            .unwrap();
        let gateway = QueryGateway::new(pool, 5000);

        let err = gateway.execute("SELECT 1").await.unwrap_err();
        assert!(!err.is_forbidden());
        assert_eq!(err.into_response().code, "NETWORK_ERROR");
    }

    #[test]
    fn test_query_result_wire_format() {
        let result = QueryResult {
            columns: vec!["id".to_string()],
            rows: vec![],
            row_count: 0,
            execution_time: 12,
        };
        let out = serde_json::to_value(&result).unwrap();
        assert!(out.get("rowCount").is_some());
        assert!(out.get("executionTime").is_some());
    }

    #[tokio::test]
    #[ignore = "requires running PostgreSQL database"]
    async fn test_select_round_trip() {
        let config = GatewayConfig::from_env().expect("DATABASE_URL must be set");
        let pool = config.connect().await.expect("Failed to create pool");
        let gateway = QueryGateway::new(pool, config.statement_timeout_ms);

        let result = gateway
            .execute("SELECT 1 AS one, 'two' AS two")
            .await
            .unwrap();
        assert_eq!(result.row_count, 1);
        assert_eq!(result.columns, vec!["one", "two"]);
        assert_eq!(result.rows[0]["one"], 1);
        assert_eq!(result.rows[0]["two"], "two");
    }

    #[tokio::test]
    #[ignore = "requires running PostgreSQL database"]
    async fn test_timeout_classifies_and_releases_connection() {
        let config = GatewayConfig::from_env().expect("DATABASE_URL must be set");
        let pool = config.connect().await.expect("Failed to create pool");
        let gateway = QueryGateway::new(pool, 100);

        let idle_before = gateway.pool().num_idle();

        let err = gateway.execute("SELECT pg_sleep(5)").await.unwrap_err();
        assert!(!err.is_forbidden());

        // Timeout expiry surfaces through the classifier as a query error.
        let resp = err.into_response();
        assert_eq!(resp.code, "QUERY_ERROR");

        // The connection held for the failed query is back in the pool.
        assert_eq!(gateway.pool().num_idle(), idle_before);
    }
}
