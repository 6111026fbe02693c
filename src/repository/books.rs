//! Books (catalog) repository

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::store::{Collection, Store},
};

#[derive(Clone)]
pub struct BooksRepository {
    store: Store,
}

impl BooksRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load the full catalog
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let _guard = self.store.lock(Collection::Books).await;
        Ok(self.store.read(Collection::Books)?)
    }

    /// Add a book to the catalog
    pub async fn create(&self, new: CreateBook) -> AppResult<Book> {
        let _guard = self.store.lock(Collection::Books).await;

        let mut books: Vec<Book> = self.store.read(Collection::Books)?;
        let book = new.into_book();
        books.push(book.clone());
        self.store.write(Collection::Books, &books)?;

        tracing::debug!(id = %book.id, isbn = %book.isbn, "Added book");
        Ok(book)
    }

    /// Remove a book by id
    ///
    /// Removing an unknown id is a no-op; outstanding issues keep their
    /// denormalized title and are not rewritten.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let _guard = self.store.lock(Collection::Books).await;

        let mut books: Vec<Book> = self.store.read(Collection::Books)?;
        books.retain(|b| b.id != id);
        self.store.write(Collection::Books, &books)?;

        Ok(())
    }
}
