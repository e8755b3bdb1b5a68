//! Curriculum row types
//!
//! Column names are snake_case in Postgres; the wire format stays camelCase
//! for the existing frontend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A guided course track: a titled, ordered group of lessons.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// beginner, intermediate, advanced
    pub difficulty: String,
    pub total_lessons: i32,
    pub estimated_hours: i32,
    pub order_index: i32,
}

/// One lesson within a learning path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub path_id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub order_index: i32,
    /// concept, practice, challenge
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// An industry scenario: a themed sample database with its ER diagram and
/// seeded data, used as the playground backdrop.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// ecommerce, hospital, college, banking, social
    pub category: String,
    /// ER diagram data for the scenario viewer
    pub schema: Value,
    pub sample_data: Value,
}

/// A practice exercise attached to a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub scenario_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub expected_query: String,
    pub order_index: i32,
}
