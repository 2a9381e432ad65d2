//! SQLite storage adapter

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use tokio::sync::Mutex;

use super::schema;
use crate::Result;
use crate::book::Book;

/// Storage contract consumed by the resolver set.
///
/// One method per parameterized statement the catalog issues. Write methods
/// report the affected-row count; zero means no row matched the given id.
/// Each method suspends at most once, while waiting for the connection.
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// All book rows, in storage-defined order
    async fn list_all(&self) -> Result<Vec<Book>>;

    /// The matching row, or `None` if no row has this id
    async fn get_by_id(&self, id: i64) -> Result<Option<Book>>;

    /// Insert a row and return the storage-assigned id
    async fn insert(&self, title: &str, author: &str) -> Result<i64>;

    /// Overwrite both columns of the matching row; `None` writes NULL
    async fn update(&self, id: i64, title: Option<&str>, author: Option<&str>) -> Result<usize>;

    /// Delete the matching row
    async fn remove(&self, id: i64) -> Result<usize>;
}

/// SQLite-backed store for the book catalog
///
/// The connection sits behind a `tokio::sync::Mutex`, so concurrent callers
/// serialize per statement. No lock is held across operation boundaries.
pub struct BookStore {
    conn: Mutex<Connection>,
}

impl BookStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Initialize the database schema
    fn initialize_schema(conn: &Connection) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Helper to convert a row to a Book
    fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<Book> {
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
        })
    }
}

#[async_trait]
impl BookStorage for BookStore {
    async fn list_all(&self) -> Result<Vec<Book>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, title, author FROM books")?;

        let books = stmt
            .query_map([], Self::row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(books)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Book>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT id, title, author FROM books WHERE id = ?1",
            [id],
            Self::row_to_book,
        )
        .optional()
        .map_err(Into::into)
    }

    async fn insert(&self, title: &str, author: &str) -> Result<i64> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO books (title, author) VALUES (?1, ?2)",
            params![title, author],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn update(&self, id: i64, title: Option<&str>, author: Option<&str>) -> Result<usize> {
        let conn = self.conn.lock().await;
        let count = conn.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3",
            params![title, author, id],
        )?;
        Ok(count)
    }

    async fn remove(&self, id: i64) -> Result<usize> {
        let conn = self.conn.lock().await;
        let count = conn.execute("DELETE FROM books WHERE id = ?1", [id])?;
        Ok(count)
    }
}
