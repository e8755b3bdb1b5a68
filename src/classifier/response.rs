//! User-facing query error responses
//!
//! Every failed playground query turns into one of these: a stable code for
//! programmatic dispatch, the raw engine message for the curious, and a
//! friendly explanation template. Ephemeral, built per failure.

use serde::{Deserialize, Serialize};

/// Explanation of a failed query, shaped for the learning UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryErrorResponse {
    pub code: String,
    pub message: String,
    pub friendly_message: String,
    pub why_it_happened: String,
    pub how_to_fix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_concept: Option<String>,
}

impl QueryErrorResponse {
    /// Fixed response for statements the playground refuses to run.
    /// Built without any database round-trip.
    pub fn forbidden_operation() -> Self {
        Self {
            code: "FORBIDDEN_OPERATION".to_string(),
            message: "This operation is not allowed".to_string(),
            friendly_message: "For safety, this playground only allows SELECT queries."
                .to_string(),
            why_it_happened: "Modifying data (INSERT, UPDATE, DELETE) and changing structure \
                              (CREATE, ALTER, DROP) are disabled."
                .to_string(),
            how_to_fix: "Practice reading data with SELECT queries. You can't accidentally \
                         break anything!"
                .to_string(),
            related_concept: Some("Query Types".to_string()),
        }
    }

    /// Fixed response when the playground database cannot be reached at all.
    /// Distinct from errors the engine itself reports.
    pub fn network_error() -> Self {
        Self {
            code: "NETWORK_ERROR".to_string(),
            message: "Could not reach the database".to_string(),
            friendly_message: "The playground database is unreachable right now.".to_string(),
            why_it_happened: "The connection to the database failed before your query could run."
                .to_string(),
            how_to_fix: "Wait a moment and try again. Your query was not the problem."
                .to_string(),
            related_concept: None,
        }
    }
}
