//! Student roster service

use crate::{
    error::AppResult,
    models::student::{CreateStudent, Student, StudentPublic},
    repository::Repository,
};

#[derive(Clone)]
pub struct RosterService {
    repository: Repository,
}

impl RosterService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all students, passwords stripped
    pub async fn list_members(&self) -> AppResult<Vec<StudentPublic>> {
        let students = self.repository.students.list().await?;
        Ok(students.into_iter().map(Student::into_public).collect())
    }

    /// Register a new student
    pub async fn add_member(&self, new: CreateStudent) -> AppResult<Student> {
        self.repository.students.create(new).await
    }
}
