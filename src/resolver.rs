//! Resolver Set
//!
//! One method per supported operation, named after the query/mutation fields
//! the HTTP layer exposes. Each resolver composes calls to the storage
//! adapter and shapes the entity returned to the caller; storage outcomes
//! (row found or not, write count) become the operation's result. A failed
//! storage call is never retried.
//!
//! Absence of an entity is a normal outcome, returned as `None`, never as an
//! error.

use std::sync::Arc;

use crate::Result;
use crate::book::Book;
use crate::storage::BookStorage;

/// The resolver set, holding the storage handle and nothing else
///
/// Stateless per call; share behind `Arc` across concurrent requests.
pub struct Resolvers<S: BookStorage> {
    store: Arc<S>,
}

impl<S: BookStorage> Resolvers<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every book in the catalog; an empty catalog is a valid result
    pub async fn books(&self) -> Result<Vec<Book>> {
        self.store.list_all().await
    }

    /// Fetch one book by id; `None` when no row matches
    pub async fn book(&self, id: i64) -> Result<Option<Book>> {
        self.store.get_by_id(id).await
    }

    /// Create a book
    ///
    /// The returned Book combines the storage-assigned id with the given
    /// fields; the row is not re-read.
    pub async fn add_book(&self, title: String, author: String) -> Result<Book> {
        let id = self.store.insert(&title, &author).await?;
        Ok(Book {
            id,
            title: Some(title),
            author: Some(author),
        })
    }

    /// Update a book
    ///
    /// Supplied fields are written as given; an absent field writes NULL over
    /// the stored value. The returned Book is built from the inputs without
    /// consulting storage, even when `id` matched no row.
    pub async fn update_book(
        &self,
        id: i64,
        title: Option<String>,
        author: Option<String>,
    ) -> Result<Book> {
        self.store
            .update(id, title.as_deref(), author.as_deref())
            .await?;
        Ok(Book { id, title, author })
    }

    /// Delete a book, returning the snapshot read just before the delete
    ///
    /// `None` when no row matches, in which case no write is attempted. The
    /// snapshot is not re-validated after the delete; a concurrent writer can
    /// slip between the read and the delete.
    pub async fn delete_book(&self, id: i64) -> Result<Option<Book>> {
        let snapshot = match self.store.get_by_id(id).await? {
            Some(book) => book,
            None => return Ok(None),
        };
        self.store.remove(id).await?;
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::Error;
    use crate::storage::BookStore;

    /// Double that fails every operation with an engine error
    struct FailingStore;

    #[async_trait]
    impl BookStorage for FailingStore {
        async fn list_all(&self) -> Result<Vec<Book>> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }

        async fn get_by_id(&self, _id: i64) -> Result<Option<Book>> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }

        async fn insert(&self, _title: &str, _author: &str) -> Result<i64> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }

        async fn update(
            &self,
            _id: i64,
            _title: Option<&str>,
            _author: Option<&str>,
        ) -> Result<usize> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }

        async fn remove(&self, _id: i64) -> Result<usize> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }
    }

    /// Double that counts delete statements issued against a real store
    struct CountingStore {
        inner: BookStore,
        removes: AtomicUsize,
    }

    #[async_trait]
    impl BookStorage for CountingStore {
        async fn list_all(&self) -> Result<Vec<Book>> {
            self.inner.list_all().await
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<Book>> {
            self.inner.get_by_id(id).await
        }

        async fn insert(&self, title: &str, author: &str) -> Result<i64> {
            self.inner.insert(title, author).await
        }

        async fn update(
            &self,
            id: i64,
            title: Option<&str>,
            author: Option<&str>,
        ) -> Result<usize> {
            self.inner.update(id, title, author).await
        }

        async fn remove(&self, id: i64) -> Result<usize> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(id).await
        }
    }

    fn resolvers() -> Resolvers<BookStore> {
        Resolvers::new(Arc::new(BookStore::open_in_memory().unwrap()))
    }

    #[tokio::test]
    async fn test_add_book_returns_assigned_id_with_given_fields() {
        let resolvers = resolvers();

        let book = resolvers
            .add_book("Dune".into(), "Herbert".into())
            .await
            .unwrap();

        assert_eq!(book.title.as_deref(), Some("Dune"));
        assert_eq!(book.author.as_deref(), Some("Herbert"));
        assert_eq!(resolvers.book(book.id).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn test_book_absent_is_none_not_error() {
        let resolvers = resolvers();

        assert_eq!(resolvers.book(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_absent_field_nulls_column() {
        let resolvers = resolvers();

        let created = resolvers.add_book("A".into(), "B".into()).await.unwrap();
        let updated = resolvers
            .update_book(created.id, Some("C".into()), None)
            .await
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("C"));
        assert_eq!(updated.author, None);
        // The write clobbers the stored author as well.
        let stored = resolvers.book(created.id).await.unwrap().unwrap();
        assert_eq!(stored.author, None);
    }

    #[tokio::test]
    async fn test_update_of_missing_id_still_returns_a_book() {
        let resolvers = resolvers();

        let book = resolvers
            .update_book(99, Some("Ghost".into()), Some("Nobody".into()))
            .await
            .unwrap();

        // Built from the inputs; nothing was persisted.
        assert_eq!(book.id, 99);
        assert_eq!(resolvers.book(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_id_issues_no_delete_statement() {
        let store = Arc::new(CountingStore {
            inner: BookStore::open_in_memory().unwrap(),
            removes: AtomicUsize::new(0),
        });
        let resolvers = Resolvers::new(Arc::clone(&store));

        assert_eq!(resolvers.delete_book(5).await.unwrap(), None);
        assert_eq!(store.removes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_returns_pre_deletion_snapshot() {
        let resolvers = resolvers();

        let created = resolvers
            .add_book("Foundation".into(), "Asimov".into())
            .await
            .unwrap();
        let snapshot = resolvers.delete_book(created.id).await.unwrap();

        assert_eq!(snapshot, Some(created.clone()));
        assert_eq!(resolvers.book(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_storage_errors_propagate_unretried() {
        let resolvers = Resolvers::new(Arc::new(FailingStore));

        assert!(matches!(
            resolvers.books().await,
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        ));
        assert!(matches!(
            resolvers.add_book("Dune".into(), "Herbert".into()).await,
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        ));
    }
}
