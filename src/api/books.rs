//! Catalog endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

use super::StatusResponse;

/// New book request
#[derive(Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Number of copies; `available` starts at this value
    pub quantity: u32,
}

/// New book response
#[derive(Serialize, ToSchema)]
pub struct CreateBookResponse {
    pub success: bool,
    pub message: String,
    pub book: Book,
}

/// Delete book request
#[derive(Deserialize, ToSchema)]
pub struct DeleteBookRequest {
    pub id: Uuid,
}

/// List all books in the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Full catalog", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 200, description = "Book added", body = CreateBookResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookRequest>,
) -> AppResult<Json<CreateBookResponse>> {
    let book = state
        .services
        .catalog
        .add_book(CreateBook {
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            quantity: request.quantity,
        })
        .await?;

    Ok(Json(CreateBookResponse {
        success: true,
        message: "Book added".to_string(),
        book,
    }))
}

/// Delete a book from the catalog
#[utoipa::path(
    post,
    path = "/books/delete",
    tag = "books",
    request_body = DeleteBookRequest,
    responses(
        (status = 200, description = "Book deleted (no-op for unknown ids)", body = StatusResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Json(request): Json<DeleteBookRequest>,
) -> AppResult<Json<StatusResponse>> {
    state.services.catalog.delete_book(request.id).await?;
    Ok(Json(StatusResponse::ok("Book deleted")))
}
