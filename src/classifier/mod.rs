//! SQL error classification
//!
//! Maps raw engine errors (SQLSTATE code + message text) to fixed,
//! learner-friendly explanation templates. The rule list is evaluated in
//! priority order and the first match wins: exactly one classification per
//! error, unlike the schema validator's accumulating pass.
//!
//! Each rule matches on an exact SQLSTATE code OR on message text — either
//! alone is sufficient. Code matches are listed most-specific-first so that
//! an exact code always beats a fuzzier message pattern lower in the list
//! (a syntax-error message may well also contain "does not exist").

pub mod response;

pub use response::QueryErrorResponse;

use std::sync::OnceLock;

use regex::Regex;

/// A raw error as reported by the relational engine. The SQLSTATE code is
/// optional; driver-level failures often carry only a message.
#[derive(Debug, Clone)]
pub struct RawSqlError {
    pub code: Option<String>,
    pub message: String,
}

impl RawSqlError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn code_is(&self, sqlstate: &str) -> bool {
        self.code.as_deref() == Some(sqlstate)
    }
}

fn relation_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"relation "(\w+)" does not exist"#).unwrap())
}

fn column_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"column "(\w+)" does not exist"#).unwrap())
}

fn extract_name(re: &Regex, message: &str) -> Option<String> {
    re.captures(message)
        .map(|caps| caps[1].to_string())
}

/// Classify a raw engine error into a fixed explanation template.
///
/// Total: always returns a response, falling back to a generic QUERY_ERROR
/// when no rule matches. At most one dynamic substitution per template (the
/// extracted table or column name).
pub fn classify(error: &RawSqlError) -> QueryErrorResponse {
    let message = error.message.clone();

    if error.code_is("42601") || error.message.contains("syntax error") {
        return QueryErrorResponse {
            code: "SYNTAX_ERROR".to_string(),
            message,
            friendly_message: "There's a syntax error in your SQL query.".to_string(),
            why_it_happened: "SQL has strict grammar rules. A keyword might be misspelled or \
                              punctuation is missing."
                .to_string(),
            how_to_fix: "Check for typos in keywords (SELECT, FROM, WHERE). Make sure all \
                         parentheses and quotes are matched."
                .to_string(),
            related_concept: Some("SQL Syntax Basics".to_string()),
        };
    }

    if error.code_is("42P01") || error.message.contains("does not exist") {
        let table_name = extract_name(relation_pattern(), &error.message)
            .unwrap_or_else(|| "the table".to_string());
        return QueryErrorResponse {
            code: "TABLE_NOT_FOUND".to_string(),
            message,
            friendly_message: format!("The table \"{}\" doesn't exist.", table_name),
            why_it_happened: "You're trying to query a table that hasn't been created or the \
                              name is misspelled."
                .to_string(),
            how_to_fix: "Check the spelling of your table name. Use the schema reference to \
                         see available tables."
                .to_string(),
            related_concept: Some("Database Tables".to_string()),
        };
    }

    if error.code_is("42703")
        || (error.message.contains("column") && error.message.contains("does not exist"))
    {
        let column_name = extract_name(column_pattern(), &error.message)
            .unwrap_or_else(|| "the column".to_string());
        return QueryErrorResponse {
            code: "COLUMN_NOT_FOUND".to_string(),
            message,
            friendly_message: format!(
                "The column \"{}\" doesn't exist in this table.",
                column_name
            ),
            why_it_happened: "You're trying to select or filter by a column that isn't in the \
                              table."
                .to_string(),
            how_to_fix: "Check the table schema to see what columns are available. Column \
                         names are case-sensitive."
                .to_string(),
            related_concept: Some("Table Columns".to_string()),
        };
    }

    if error.code_is("42P10") || error.message.contains("GROUP BY") {
        return QueryErrorResponse {
            code: "GROUPBY_ERROR".to_string(),
            message,
            friendly_message: "There's an issue with your GROUP BY clause.".to_string(),
            why_it_happened: "When using GROUP BY, every column in SELECT must either be in \
                              GROUP BY or be an aggregate function."
                .to_string(),
            how_to_fix: "Add all non-aggregated columns to your GROUP BY clause, or wrap them \
                         in an aggregate like MAX() or MIN()."
                .to_string(),
            related_concept: Some("GROUP BY Clause".to_string()),
        };
    }

    if error.code_is("22P02") || error.message.contains("invalid input syntax") {
        return QueryErrorResponse {
            code: "TYPE_ERROR".to_string(),
            message,
            friendly_message: "There's a data type mismatch in your query.".to_string(),
            why_it_happened: "You're comparing or inserting values of incompatible types \
                              (like text to a number column)."
                .to_string(),
            how_to_fix: "Check that your values match the column types. Numbers don't need \
                         quotes, text does."
                .to_string(),
            related_concept: Some("Data Types".to_string()),
        };
    }

    QueryErrorResponse {
        code: "QUERY_ERROR".to_string(),
        message,
        friendly_message: "Something went wrong with your query.".to_string(),
        why_it_happened: "The database couldn't execute your query due to an error.".to_string(),
        how_to_fix: "Review your query syntax and try again. Check the schema reference for \
                     table and column names."
            .to_string(),
        related_concept: None,
    }
}
