//! Table and column definitions as authored in the schema designer
//!
//! These mirror the designer's wire format exactly (camelCase field names).
//! They are ephemeral client-side state: created and destroyed within a
//! design session, never persisted by this crate.

use serde::{Deserialize, Serialize};

/// SQL type literals the designer offers. `ColumnDefinition::data_type` is
/// expected to be one of these, but the validator does not reject unknown
/// strings; unrecognized types simply match no rule.
pub const DATA_TYPES: &[&str] = &[
    "INTEGER",
    "BIGINT",
    "SERIAL",
    "VARCHAR(255)",
    "TEXT",
    "BOOLEAN",
    "DATE",
    "TIMESTAMP",
    "DECIMAL(10,2)",
    "JSON",
];

/// One user-authored table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

/// One column within a table definition.
///
/// When `is_foreign_key` is set, `references` should be present. That is not
/// enforced at construction: the validator reports the violation as an
/// `invalid_fk` error instead of refusing to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ColumnReference>,
    #[serde(default)]
    pub is_nullable: bool,
}

/// Non-owning cross-reference from a foreign-key column to another table's
/// column. Whether the target actually exists in the current table set is
/// deliberately not checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReference {
    pub table: String,
    pub column: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_wire_format_round_trip() {
        let json = r#"{
            "name": "user_id",
            "type": "INTEGER",
            "isPrimaryKey": false,
            "isForeignKey": true,
            "references": {"table": "users", "column": "id"},
            "isNullable": false
        }"#;

        let col: ColumnDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(col.name, "user_id");
        assert_eq!(col.data_type, "INTEGER");
        assert!(col.is_foreign_key);
        assert_eq!(col.references.as_ref().unwrap().table, "users");

        let out = serde_json::to_value(&col).unwrap();
        assert_eq!(out["type"], "INTEGER");
        assert_eq!(out["isForeignKey"], true);
    }

    #[test]
    fn test_designer_type_set_includes_the_email_standard() {
        assert!(DATA_TYPES.contains(&"VARCHAR(255)"));
        assert!(DATA_TYPES.contains(&"SERIAL"));
    }

    #[test]
    fn test_references_and_nullable_are_optional() {
        let json = r#"{
            "name": "email",
            "type": "VARCHAR(255)",
            "isPrimaryKey": false,
            "isForeignKey": false
        }"#;

        let col: ColumnDefinition = serde_json::from_str(json).unwrap();
        assert!(col.references.is_none());
        assert!(!col.is_nullable);

        // Absent references must not serialize as null.
        let out = serde_json::to_value(&col).unwrap();
        assert!(out.get("references").is_none());
    }
}
