//! Schema design validation
//!
//! Learners sketch tables in the visual designer and submit them for
//! feedback. This module holds the table/column definitions that come over
//! the wire, the diagnostic types sent back, and the rule-based validator
//! connecting the two.
//!
//! Validation is a flat pass over independent rules: each rule is a pure
//! predicate plus a diagnostic builder, rules never consult each other's
//! output, and a single table or column may trigger several diagnostics.

pub mod diagnostics;
pub mod types;
pub mod validator;

pub use diagnostics::{
    SchemaError, SchemaErrorKind, SchemaWarning, SchemaWarningKind, ValidationResult,
};
pub use types::{ColumnDefinition, ColumnReference, TableDefinition, DATA_TYPES};
pub use validator::validate;
