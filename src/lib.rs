//! # Bookshelf - Book catalog query/mutation service
//!
//! A single-entity catalog (books identified by title/author) served over a
//! query/mutation HTTP endpoint and backed by SQLite.
//!
//! Bookshelf provides:
//! - `Book` entity with storage-assigned integer ids
//! - SQLite-backed storage adapter for the catalog's parameterized statements
//! - Resolver set mapping named operations to storage actions and results
//! - Axum HTTP layer deserializing the operation envelope

pub mod book;
pub mod config;
pub mod resolver;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use book::Book;
pub use resolver::Resolvers;
pub use storage::{BookStorage, BookStore};

/// Result type alias for Bookshelf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Bookshelf operations
///
/// Absence of an entity is never an error; resolvers express it as
/// `Option::None` inside an `Ok` result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
