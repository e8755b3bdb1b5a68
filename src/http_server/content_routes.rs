//! Curriculum content routes
//!
//! Read-only endpoints backing the learn and scenarios pages. All reads go
//! through [`ContentStore`]; the only logic here is existence checks (404)
//! and mapping store failures to 500.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::content::{ContentStore, Exercise, LearningPath, Lesson, Scenario};

/// Shared state for the content handlers.
pub struct ContentState {
    pub store: ContentStore,
}

impl ContentState {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn fetch_failed(what: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Failed to fetch {}", what) })),
    )
}

fn not_found(what: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{} not found", what) })),
    )
}

/// Create the curriculum content routes (mounted at the root).
pub fn content_routes(state: Arc<ContentState>) -> Router {
    Router::new()
        .route("/learning-paths", get(list_learning_paths_handler))
        .route("/learning-paths/:id", get(get_learning_path_handler))
        .route("/learning-paths/:id/lessons", get(list_lessons_handler))
        .route("/scenarios", get(list_scenarios_handler))
        .route("/scenarios/:id", get(get_scenario_handler))
        .route("/scenarios/:id/exercises", get(list_exercises_handler))
        .with_state(state)
}

async fn list_learning_paths_handler(
    State(state): State<Arc<ContentState>>,
) -> Result<Json<Vec<LearningPath>>, ApiError> {
    let paths = state
        .store
        .learning_paths()
        .await
        .map_err(|_| fetch_failed("learning paths"))?;
    Ok(Json(paths))
}

async fn get_learning_path_handler(
    State(state): State<Arc<ContentState>>,
    Path(id): Path<String>,
) -> Result<Json<LearningPath>, ApiError> {
    let path = state
        .store
        .learning_path(&id)
        .await
        .map_err(|_| fetch_failed("learning path"))?
        .ok_or_else(|| not_found("Learning path"))?;
    Ok(Json(path))
}

async fn list_lessons_handler(
    State(state): State<Arc<ContentState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = state
        .store
        .lessons(&id)
        .await
        .map_err(|_| fetch_failed("lessons"))?;
    Ok(Json(lessons))
}

async fn list_scenarios_handler(
    State(state): State<Arc<ContentState>>,
) -> Result<Json<Vec<Scenario>>, ApiError> {
    let scenarios = state
        .store
        .scenarios()
        .await
        .map_err(|_| fetch_failed("scenarios"))?;
    Ok(Json(scenarios))
}

async fn get_scenario_handler(
    State(state): State<Arc<ContentState>>,
    Path(id): Path<String>,
) -> Result<Json<Scenario>, ApiError> {
    let scenario = state
        .store
        .scenario(&id)
        .await
        .map_err(|_| fetch_failed("scenario"))?
        .ok_or_else(|| not_found("Scenario"))?;
    Ok(Json(scenario))
}

async fn list_exercises_handler(
    State(state): State<Arc<ContentState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = state
        .store
        .exercises(&id)
        .await
        .map_err(|_| fetch_failed("exercises"))?;
    Ok(Json(exercises))
}
