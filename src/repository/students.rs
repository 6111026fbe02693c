//! Students (roster) repository

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::student::{CreateStudent, Student},
    repository::store::{Collection, Store},
};

#[derive(Clone)]
pub struct StudentsRepository {
    store: Store,
}

impl StudentsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load the full roster
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        let _guard = self.store.lock(Collection::Students).await;
        Ok(self.store.read(Collection::Students)?)
    }

    /// Check whether a student id is registered
    pub async fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.list().await?.iter().any(|s| s.id == id))
    }

    /// Register a new student
    ///
    /// The id is the unique key: a duplicate is rejected rather than creating
    /// a second record.
    pub async fn create(&self, new: CreateStudent) -> AppResult<Student> {
        let _guard = self.store.lock(Collection::Students).await;

        let mut students: Vec<Student> = self.store.read(Collection::Students)?;

        if students.iter().any(|s| s.id == new.id) {
            return Err(AppError::Conflict("Student ID already exists".to_string()));
        }

        let student = new.into_student(Utc::now().date_naive());
        students.push(student.clone());
        self.store.write(Collection::Students, &students)?;

        tracing::debug!(id = %student.id, "Registered student");
        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::Store;
    use tempfile::TempDir;

    fn roster() -> (TempDir, StudentsRepository) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, StudentsRepository::new(store))
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let (_dir, repo) = roster();

        repo.create(CreateStudent {
            id: "s-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@student.edu".to_string(),
        })
        .await
        .unwrap();

        let err = repo
            .create(CreateStudent {
                id: "s-1".to_string(),
                name: "Someone Else".to_string(),
                email: "other@student.edu".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));

        // One seed record plus exactly one new record
        let students = repo.list().await.unwrap();
        assert_eq!(students.iter().filter(|s| s.id == "s-1").count(), 1);
    }

    #[tokio::test]
    async fn new_students_get_default_password_and_date() {
        let (_dir, repo) = roster();

        let student = repo
            .create(CreateStudent {
                id: "s-2".to_string(),
                name: "Grace".to_string(),
                email: "grace@student.edu".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(student.password, "pass123");
        assert!(student.date.is_some());
    }
}
