//! The Book entity

use serde::{Deserialize, Serialize};

/// The sole domain record, identified by a storage-assigned integer id.
///
/// `title` and `author` mirror the nullable TEXT columns of the books table:
/// both are required when a book is created, but an update can leave either
/// column NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    /// Create a book with both fields present
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}
