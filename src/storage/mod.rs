//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - books(id, title, author)
//!
//! `id` is the SQLite rowid; title and author are nullable TEXT.

pub mod schema;
pub mod sqlite;

pub use sqlite::{BookStorage, BookStore};
