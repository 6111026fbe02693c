//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, issues, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS API",
        version = "0.1.0",
        description = "Library Management System REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::admin_login,
        auth::student_login,
        // Books
        books::list_books,
        books::create_book,
        books::delete_book,
        // Members
        members::list_members,
        members::create_member,
        // Issues
        issues::issue_book,
    ),
    components(
        schemas(
            // Auth
            auth::AdminLoginRequest,
            auth::AdminLoginResponse,
            auth::StudentLoginRequest,
            auth::StudentLoginResponse,
            // Books
            crate::models::book::Book,
            books::CreateBookRequest,
            books::CreateBookResponse,
            books::DeleteBookRequest,
            // Members
            crate::models::student::StudentPublic,
            members::CreateMemberRequest,
            // Issues
            crate::models::issue::Issue,
            crate::models::issue::IssueStatus,
            issues::IssueBookRequest,
            // Admin
            crate::models::admin::AdminPublic,
            // Shared
            crate::api::StatusResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "members", description = "Student roster management"),
        (name = "issues", description = "Book checkouts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
