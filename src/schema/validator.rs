//! Rule-based schema validator
//!
//! `validate` runs a fixed set of independent checks over the submitted
//! tables and concatenates whatever diagnostics they produce. Output order
//! follows table order, then column order within each table. No rule
//! short-circuits another.
//!
//! The pass is pure and total: no side effects, deterministic for identical
//! input, and it never fails. An empty table list validates cleanly.

use super::diagnostics::{
    SchemaError, SchemaErrorKind, SchemaWarning, SchemaWarningKind, ValidationResult,
};
use super::types::{ColumnDefinition, TableDefinition};

/// Validate a set of table definitions, producing errors (schema-invalidating)
/// and warnings (design-quality, never affect validity).
pub fn validate(tables: &[TableDefinition]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for table in tables {
        check_primary_key(table, &mut errors);

        for column in &table.columns {
            check_foreign_key_reference(table, column, &mut errors);
            check_email_column_type(table, column, &mut warnings);
            check_column_name_spacing(table, column, &mut warnings);
        }

        check_table_name_spacing(table, &mut warnings);
    }

    ValidationResult::new(errors, warnings)
}

/// Every table needs a primary key to uniquely identify rows.
fn check_primary_key(table: &TableDefinition, errors: &mut Vec<SchemaError>) {
    let has_pk = table.columns.iter().any(|c| c.is_primary_key);
    if !has_pk {
        errors.push(SchemaError {
            kind: SchemaErrorKind::MissingPk,
            table: table.name.clone(),
            message: format!("Table \"{}\" has no primary key", table.name),
            suggestion: "Every table should have a primary key to uniquely identify rows. \
                         Add an 'id' column."
                .to_string(),
        });
    }
}

/// A column flagged as a foreign key must say what it points to. Whether the
/// referenced table/column actually exists is out of scope here.
fn check_foreign_key_reference(
    table: &TableDefinition,
    column: &ColumnDefinition,
    errors: &mut Vec<SchemaError>,
) {
    if column.is_foreign_key && column.references.is_none() {
        errors.push(SchemaError {
            kind: SchemaErrorKind::InvalidFk,
            table: table.name.clone(),
            message: format!("Foreign key \"{}\" has no reference", column.name),
            suggestion: "Specify which table and column this foreign key points to.".to_string(),
        });
    }
}

/// Email columns should be VARCHAR(255): RFC 5321 caps addresses at 254
/// characters, so 255 is the conventional size.
fn check_email_column_type(
    table: &TableDefinition,
    column: &ColumnDefinition,
    warnings: &mut Vec<SchemaWarning>,
) {
    if column.name.eq_ignore_ascii_case("email") && column.data_type != "VARCHAR(255)" {
        warnings.push(SchemaWarning {
            kind: SchemaWarningKind::TypeChoice,
            table: table.name.clone(),
            column: Some(column.name.clone()),
            message: "Consider using VARCHAR(255) for email fields".to_string(),
            suggestion: "Emails have a maximum length of 254 characters, VARCHAR(255) is standard."
                .to_string(),
        });
    }
}

fn check_column_name_spacing(
    table: &TableDefinition,
    column: &ColumnDefinition,
    warnings: &mut Vec<SchemaWarning>,
) {
    if column.name.contains(' ') {
        warnings.push(SchemaWarning {
            kind: SchemaWarningKind::Naming,
            table: table.name.clone(),
            column: Some(column.name.clone()),
            message: "Column name contains spaces".to_string(),
            suggestion: "Use snake_case (underscores) instead of spaces in column names."
                .to_string(),
        });
    }
}

fn check_table_name_spacing(table: &TableDefinition, warnings: &mut Vec<SchemaWarning>) {
    if table.name.contains(' ') {
        warnings.push(SchemaWarning {
            kind: SchemaWarningKind::Naming,
            table: table.name.clone(),
            column: None,
            message: "Table name contains spaces".to_string(),
            suggestion: "Use snake_case (underscores) instead of spaces in table names."
                .to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::ColumnReference;

    fn column(name: &str, data_type: &str) -> ColumnDefinition {
        ColumnDefinition {
            name: name.to_string(),
            data_type: data_type.to_string(),
            is_primary_key: false,
            is_foreign_key: false,
            references: None,
            is_nullable: false,
        }
    }

    fn pk(name: &str, data_type: &str) -> ColumnDefinition {
        ColumnDefinition {
            is_primary_key: true,
            ..column(name, data_type)
        }
    }

    fn table(name: &str, columns: Vec<ColumnDefinition>) -> TableDefinition {
        TableDefinition {
            name: name.to_string(),
            columns,
        }
    }

    #[test]
    fn test_well_formed_table_is_clean() {
        let tables = vec![table(
            "users",
            vec![
                pk("id", "SERIAL"),
                column("email", "VARCHAR(255)"),
                column("created_at", "TIMESTAMP"),
            ],
        )];

        let result = validate(&tables);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_primary_key_is_an_error() {
        let tables = vec![table("orders", vec![column("total", "DECIMAL(10,2)")])];

        let result = validate(&tables);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, SchemaErrorKind::MissingPk);
        assert_eq!(result.errors[0].table, "orders");
        assert!(result.errors[0].message.contains("orders"));
    }

    #[test]
    fn test_one_missing_pk_error_per_offending_table() {
        let tables = vec![
            table("a", vec![column("x", "TEXT")]),
            table("b", vec![pk("id", "SERIAL")]),
            table("c", vec![column("y", "TEXT")]),
        ];

        let result = validate(&tables);
        let pk_errors: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.kind == SchemaErrorKind::MissingPk)
            .collect();
        assert_eq!(pk_errors.len(), 2);
        assert_eq!(pk_errors[0].table, "a");
        assert_eq!(pk_errors[1].table, "c");
    }

    #[test]
    fn test_foreign_key_without_reference_is_an_error() {
        let mut fk = column("user_id", "INTEGER");
        fk.is_foreign_key = true;

        let tables = vec![table("orders", vec![pk("id", "SERIAL"), fk])];

        let result = validate(&tables);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, SchemaErrorKind::InvalidFk);
        assert_eq!(result.errors[0].table, "orders");
        assert!(result.errors[0].message.contains("user_id"));
    }

    #[test]
    fn test_any_reference_suppresses_invalid_fk() {
        // Existence of the referenced table is deliberately not checked.
        let mut fk = column("user_id", "INTEGER");
        fk.is_foreign_key = true;
        fk.references = Some(ColumnReference {
            table: "no_such_table".to_string(),
            column: "id".to_string(),
        });

        let tables = vec![table("orders", vec![pk("id", "SERIAL"), fk])];

        let result = validate(&tables);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_email_column_type_warning() {
        let tables = vec![table(
            "users",
            vec![pk("id", "SERIAL"), column("Email", "TEXT")],
        )];

        let result = validate(&tables);
        assert!(result.is_valid); // warnings never affect validity
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, SchemaWarningKind::TypeChoice);
        assert_eq!(result.warnings[0].column.as_deref(), Some("Email"));
        assert!(result.warnings[0].message.contains("VARCHAR(255)"));
    }

    #[test]
    fn test_email_varchar_255_matches_no_rule() {
        let tables = vec![table(
            "users",
            vec![pk("id", "SERIAL"), column("email", "VARCHAR(255)")],
        )];

        assert!(validate(&tables).warnings.is_empty());
    }

    #[test]
    fn test_names_with_spaces_warn() {
        let tables = vec![table(
            "user orders",
            vec![pk("id", "SERIAL"), column("order total", "DECIMAL(10,2)")],
        )];

        let result = validate(&tables);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);

        // Column warnings come before the table-name warning.
        assert_eq!(result.warnings[0].kind, SchemaWarningKind::Naming);
        assert_eq!(result.warnings[0].column.as_deref(), Some("order total"));
        assert_eq!(result.warnings[1].kind, SchemaWarningKind::Naming);
        assert!(result.warnings[1].column.is_none());
    }

    #[test]
    fn test_rules_accumulate_on_one_table() {
        let mut fk = column("customer id", "INTEGER");
        fk.is_foreign_key = true;

        let tables = vec![table("order items", vec![fk, column("email", "TEXT")])];

        let result = validate(&tables);
        // missing_pk + invalid_fk
        assert_eq!(result.errors.len(), 2);
        // column space + email type + table space
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_empty_input_validates_cleanly() {
        let result = validate(&[]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let tables = vec![
            table("a", vec![column("x y", "TEXT")]),
            table("b", vec![pk("id", "SERIAL"), column("email", "TEXT")]),
        ];

        let first = serde_json::to_value(validate(&tables)).unwrap();
        for _ in 0..50 {
            let again = serde_json::to_value(validate(&tables)).unwrap();
            assert_eq!(first, again);
        }
    }
}
