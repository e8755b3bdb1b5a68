//! Lesson and scenario content
//!
//! Read-side of the curriculum: learning paths with their lessons, and
//! industry scenarios with their practice exercises. Plain reads from
//! Postgres ordered by authoring position; the only business logic is an
//! existence check (missing ids surface as `None`, which the HTTP layer
//! turns into 404).

pub mod models;
pub mod store;

pub use models::{Exercise, LearningPath, Lesson, Scenario};
pub use store::ContentStore;
