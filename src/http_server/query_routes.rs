//! Playground query routes
//!
//! `POST /execute` (mounted under `/query`): runs one sandboxed query.
//! Status codes matter for frontend compatibility: 200 on success, 403 when
//! the read-only policy rejects the statement, 400 for bad input and for
//! every execution or connectivity failure.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::classifier::{classify, RawSqlError};
use crate::gateway::QueryGateway;

/// Shared state for the query handlers.
pub struct QueryState {
    pub gateway: QueryGateway,
}

impl QueryState {
    pub fn new(gateway: QueryGateway) -> Self {
        Self { gateway }
    }
}

/// Create the playground query routes.
pub fn query_routes(state: Arc<QueryState>) -> Router {
    Router::new()
        .route("/execute", post(execute_query_handler))
        .with_state(state)
}

async fn execute_query_handler(
    State(state): State<Arc<QueryState>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(query) = body.get("query").and_then(Value::as_str) else {
        // Missing or non-string query: same classified shape the frontend
        // already renders for execution failures.
        let error = classify(&RawSqlError::new(None, "Query is required"));
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response();
    };

    match state.gateway.execute(query).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            let status = if err.is_forbidden() {
                StatusCode::FORBIDDEN
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(json!({ "error": err.into_response() }))).into_response()
        }
    }
}
