//! Schema designer routes
//!
//! `POST /validate` (mounted under `/schema`): runs the design-quality rule
//! pass over the submitted tables. Stateless; the validator is a pure
//! function.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::schema::{validate, TableDefinition};

/// Create the schema validation routes.
pub fn schema_routes() -> Router {
    Router::new().route("/validate", post(validate_schema_handler))
}

async fn validate_schema_handler(Json(body): Json<Value>) -> Response {
    let Some(tables_value) = body.get("tables").filter(|v| v.is_array()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Tables array is required" })),
        )
            .into_response();
    };

    let tables: Vec<TableDefinition> = match serde_json::from_value(tables_value.clone()) {
        Ok(tables) => tables,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid table definition: {}", err) })),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(validate(&tables))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/validate")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap();

        let response = schema_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_valid_schema_returns_clean_result() {
        let body = r#"{"tables": [{
            "name": "users",
            "columns": [
                {"name": "id", "type": "SERIAL", "isPrimaryKey": true, "isForeignKey": false}
            ]
        }]}"#;

        let (status, value) = post_json(body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["isValid"], true);
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_missing_pk_flows_through_the_endpoint() {
        let body = r#"{"tables": [{
            "name": "orders",
            "columns": [
                {"name": "total", "type": "DECIMAL(10,2)", "isPrimaryKey": false, "isForeignKey": false}
            ]
        }]}"#;

        let (status, value) = post_json(body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["isValid"], false);
        assert_eq!(value["errors"][0]["type"], "missing_pk");
        assert_eq!(value["errors"][0]["table"], "orders");
    }

    #[tokio::test]
    async fn test_missing_tables_field_is_400() {
        let (status, value) = post_json(r#"{"something": "else"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"], "Tables array is required");
    }

    #[tokio::test]
    async fn test_non_array_tables_is_400() {
        let (status, value) = post_json(r#"{"tables": "users"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"], "Tables array is required");
    }

    #[tokio::test]
    async fn test_empty_tables_array_is_valid() {
        let (status, value) = post_json(r#"{"tables": []}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["isValid"], true);
    }
}
