//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{admin::AdminPublic, student::StudentPublic},
};

/// Admin login request
#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin login response
#[derive(Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub user: AdminPublic,
}

/// Student login request
#[derive(Deserialize, ToSchema)]
pub struct StudentLoginRequest {
    pub id: String,
    pub password: String,
}

/// Student login response
#[derive(Serialize, ToSchema)]
pub struct StudentLoginResponse {
    pub success: bool,
    pub user: StudentPublic,
}

/// Authenticate an admin
#[utoipa::path(
    post,
    path = "/login/admin",
    tag = "auth",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn admin_login(
    State(state): State<crate::AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    let admin = state
        .services
        .auth
        .login_admin(&request.email, &request.password)
        .await?;

    Ok(Json(AdminLoginResponse {
        success: true,
        user: admin.into_public(),
    }))
}

/// Authenticate a student
#[utoipa::path(
    post,
    path = "/login/student",
    tag = "auth",
    request_body = StudentLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = StudentLoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn student_login(
    State(state): State<crate::AppState>,
    Json(request): Json<StudentLoginRequest>,
) -> AppResult<Json<StudentLoginResponse>> {
    let student = state
        .services
        .auth
        .login_student(&request.id, &request.password)
        .await?;

    Ok(Json(StudentLoginResponse {
        success: true,
        user: student.into_public(),
    }))
}
