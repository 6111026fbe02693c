//! Roster endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::student::{CreateStudent, StudentPublic},
};

use super::StatusResponse;

/// New roster member request
#[derive(Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// List all registered students, passwords stripped
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "Full roster", body = Vec<StudentPublic>)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<StudentPublic>>> {
    let members = state.services.roster.list_members().await?;
    Ok(Json(members))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMemberRequest,
    responses(
        (status = 200, description = "Member added, or success:false when the id already exists", body = StatusResponse)
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> AppResult<Json<StatusResponse>> {
    state
        .services
        .roster
        .add_member(CreateStudent {
            id: request.id,
            name: request.name,
            email: request.email,
        })
        .await?;

    Ok(Json(StatusResponse::ok("Member added")))
}
