//! Statement allowlist policy
//!
//! The playground is read-only: statements that modify data or structure are
//! rejected before they reach the database. This is a prefix check on the
//! first keyword of the trimmed, case-folded query. It is a shallow guard
//! for a sandbox, not a security boundary: a CTE or comment-prefixed write
//! slips past it, which is an accepted limitation (the practice database
//! holds nothing worth protecting and is rebuilt on seed).

/// Leading keywords the playground refuses to execute.
const FORBIDDEN_PREFIXES: &[&str] = &[
    "DROP", "DELETE", "TRUNCATE", "ALTER", "CREATE", "INSERT", "UPDATE",
];

/// Returns true when the query's first keyword is on the denylist.
pub fn is_forbidden_statement(query: &str) -> bool {
    let normalized = query.trim().to_uppercase();
    FORBIDDEN_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}
