//! Diagnostic types produced by the schema validator
//!
//! The `type` tags are stable identifiers consumed programmatically by the
//! designer UI (icon selection, grouping). They are fixed enum values, never
//! translated or derived text.

use serde::{Deserialize, Serialize};

/// Error categories. Errors make a schema invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaErrorKind {
    /// Table has no primary key column
    MissingPk,
    /// Foreign-key column without a reference target
    InvalidFk,
    /// Duplicated data that belongs in its own table
    RedundantData,
    /// Normal-form violation
    Normalization,
}

/// Warning categories. Warnings never affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaWarningKind {
    /// Table or column name breaks naming conventions
    Naming,
    /// Questionable column type for the data it holds
    TypeChoice,
    /// Nullability concern
    Nullable,
}

/// A schema-invalidating problem, scoped to one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaError {
    #[serde(rename = "type")]
    pub kind: SchemaErrorKind,
    pub table: String,
    pub message: String,
    pub suggestion: String,
}

/// A design-quality concern, scoped to a table and optionally a column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaWarning {
    #[serde(rename = "type")]
    pub kind: SchemaWarningKind,
    pub table: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
    pub suggestion: String,
}

/// Outcome of one validation pass. Built fresh on every call; `is_valid`
/// holds exactly when `errors` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<SchemaError>,
    pub warnings: Vec<SchemaWarning>,
}

impl ValidationResult {
    /// Assemble a result from collected diagnostics, deriving `is_valid`.
    pub fn new(errors: Vec<SchemaError>, warnings: Vec<SchemaWarning>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
