//! Content store backed by Postgres
//!
//! Queries run on the same pool the gateway uses; all reads, no caching.

use sqlx::PgPool;

use super::models::{Exercise, LearningPath, Lesson, Scenario};

/// Read access to curriculum content.
#[derive(Clone)]
pub struct ContentStore {
    pool: PgPool,
}

impl ContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All learning paths in curriculum order.
    pub async fn learning_paths(&self) -> Result<Vec<LearningPath>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, description, icon, difficulty, total_lessons, \
             estimated_hours, order_index \
             FROM learning_paths ORDER BY order_index",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn learning_path(&self, id: &str) -> Result<Option<LearningPath>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, description, icon, difficulty, total_lessons, \
             estimated_hours, order_index \
             FROM learning_paths WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Lessons of one path in lesson order. An unknown path id yields an
    /// empty list, not an error.
    pub async fn lessons(&self, path_id: &str) -> Result<Vec<Lesson>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, path_id, title, description, content, order_index, type \
             FROM lessons WHERE path_id = $1 ORDER BY order_index",
        )
        .bind(path_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn scenarios(&self) -> Result<Vec<Scenario>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, description, icon, category, schema, sample_data \
             FROM scenarios",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn scenario(&self, id: &str) -> Result<Option<Scenario>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, description, icon, category, schema, sample_data \
             FROM scenarios WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn exercises(&self, scenario_id: &str) -> Result<Vec<Exercise>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, scenario_id, title, description, difficulty, hint, \
             expected_query, order_index \
             FROM exercises WHERE scenario_id = $1 ORDER BY order_index",
        )
        .bind(scenario_id)
        .fetch_all(&self.pool)
        .await
    }
}
