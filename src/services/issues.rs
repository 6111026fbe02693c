//! Checkout (issue) service

use crate::{
    error::{AppError, AppResult},
    models::issue::Issue,
    repository::Repository,
};

#[derive(Clone)]
pub struct IssuesService {
    repository: Repository,
}

impl IssuesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check a book out to a student
    ///
    /// Validation order: student, then ISBN, then availability. Each failure
    /// short-circuits before any write happens.
    pub async fn issue_book(&self, student_id: &str, isbn: &str) -> AppResult<Issue> {
        if !self.repository.students.exists(student_id).await? {
            return Err(AppError::NotFound("Student ID not found".to_string()));
        }

        self.repository.issues.create(student_id, isbn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::Store;
    use tempfile::TempDir;

    #[tokio::test]
    async fn unknown_student_is_rejected_before_any_write() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let repository = Repository::new(store);
        let service = IssuesService::new(repository.clone());

        // Seed catalog has this ISBN in stock, but the student is unknown
        let err = service.issue_book("nobody", "978-01314290").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let books = repository.books.list().await.unwrap();
        assert_eq!(books[0].available, books[0].quantity);
        assert!(repository.issues.list().await.unwrap().is_empty());
    }
}
