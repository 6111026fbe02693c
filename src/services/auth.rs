//! Authentication service
//!
//! Credentials are compared in clear text against the stored collections;
//! there is no session or token layer. Matched records are returned with the
//! password stripped before they reach the wire.

use crate::{
    error::{AppError, AppResult},
    models::{admin::Admin, student::Student},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Authenticate an admin by email and password
    pub async fn login_admin(&self, email: &str, password: &str) -> AppResult<Admin> {
        let admins = self.repository.admins.list().await?;

        admins
            .into_iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or_else(|| AppError::Authentication("Invalid Admin Credentials".to_string()))
    }

    /// Authenticate a student by id and password
    pub async fn login_student(&self, id: &str, password: &str) -> AppResult<Student> {
        let students = self.repository.students.list().await?;

        students
            .into_iter()
            .find(|s| s.id == id && s.password == password)
            .ok_or_else(|| AppError::Authentication("Invalid Student Credentials".to_string()))
    }
}
