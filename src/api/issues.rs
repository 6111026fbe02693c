//! Checkout endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::StatusResponse;

/// Issue book request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueBookRequest {
    /// Roster id of the borrowing student
    pub student_id: String,
    /// ISBN of the book to check out
    pub isbn: String,
}

/// Check a book out to a student
#[utoipa::path(
    post,
    path = "/issue",
    tag = "issues",
    request_body = IssueBookRequest,
    responses(
        (status = 200, description = "Book issued, or success:false with the rejection reason", body = StatusResponse)
    )
)]
pub async fn issue_book(
    State(state): State<crate::AppState>,
    Json(request): Json<IssueBookRequest>,
) -> AppResult<Json<StatusResponse>> {
    state
        .services
        .issues
        .issue_book(&request.student_id, &request.isbn)
        .await?;

    Ok(Json(StatusResponse::ok("Book issued successfully")))
}
