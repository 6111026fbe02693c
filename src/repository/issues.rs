//! Issues (checkout) repository

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{book::Book, issue::Issue},
    repository::store::{Collection, Store},
};

#[derive(Clone)]
pub struct IssuesRepository {
    store: Store,
}

impl IssuesRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load the full issue log
    pub async fn list(&self) -> AppResult<Vec<Issue>> {
        let _guard = self.store.lock(Collection::Issues).await;
        Ok(self.store.read(Collection::Issues)?)
    }

    /// Record a checkout of one copy of the book with the given ISBN
    ///
    /// Validates the ISBN and availability, decrements the shelf count and
    /// appends the issue record. Validation failures leave both collections
    /// untouched. The caller is responsible for verifying the student exists.
    pub async fn create(&self, student_id: &str, isbn: &str) -> AppResult<Issue> {
        // Books guard is held across the issues append so the decrement and
        // the new record land together.
        let _books_guard = self.store.lock(Collection::Books).await;

        let mut books: Vec<Book> = self.store.read(Collection::Books)?;

        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::NotFound("Book ISBN not found".to_string()))?;

        if book.available == 0 {
            return Err(AppError::BusinessRule("Book is out of stock".to_string()));
        }

        book.available -= 1;
        let issue = Issue::new(
            student_id.to_string(),
            isbn.to_string(),
            book.title.clone(),
            Utc::now().date_naive(),
        );

        self.store.write(Collection::Books, &books)?;

        let _issues_guard = self.store.lock(Collection::Issues).await;
        let mut issues: Vec<Issue> = self.store.read(Collection::Issues)?;
        issues.push(issue.clone());
        self.store.write(Collection::Issues, &issues)?;

        tracing::info!(student = student_id, isbn, "Issued book");
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::CreateBook;
    use crate::repository::books::BooksRepository;
    use crate::repository::store::Store;
    use tempfile::TempDir;

    fn repos() -> (TempDir, BooksRepository, IssuesRepository) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (
            dir,
            BooksRepository::new(store.clone()),
            IssuesRepository::new(store),
        )
    }

    async fn shelf_count(books: &BooksRepository, isbn: &str) -> u32 {
        books
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|b| b.isbn == isbn)
            .unwrap()
            .available
    }

    #[tokio::test]
    async fn checkout_decrements_shelf_and_logs_one_issue() {
        let (_dir, books, issues) = repos();

        books
            .create(CreateBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                isbn: "978-0441172719".to_string(),
                quantity: 2,
            })
            .await
            .unwrap();

        let issue = issues.create("233016112", "978-0441172719").await.unwrap();
        assert_eq!(issue.book_title, "Dune");
        assert_eq!(shelf_count(&books, "978-0441172719").await, 1);
        assert_eq!(issues.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repeat_checkouts_drain_the_shelf() {
        let (_dir, books, issues) = repos();

        books
            .create(CreateBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                isbn: "X".to_string(),
                quantity: 2,
            })
            .await
            .unwrap();

        issues.create("233016112", "X").await.unwrap();
        issues.create("233016112", "X").await.unwrap();

        assert_eq!(shelf_count(&books, "X").await, 0);
        assert_eq!(issues.list().await.unwrap().len(), 2);

        let err = issues.create("233016112", "X").await.unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));

        // The failed attempt touched nothing
        assert_eq!(shelf_count(&books, "X").await, 0);
        assert_eq!(issues.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_isbn_leaves_storage_untouched() {
        let (_dir, books, issues) = repos();

        let before = books.list().await.unwrap().len();
        let err = issues.create("233016112", "no-such-isbn").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(books.list().await.unwrap().len(), before);
        assert!(issues.list().await.unwrap().is_empty());
    }
}
