//! Database schema definitions

/// SQL to create the books table
///
/// `INTEGER PRIMARY KEY` aliases the rowid, so SQLite assigns ids on insert.
pub const CREATE_BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    title TEXT,
    author TEXT
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_BOOKS_TABLE]
}
