//! API handlers for the LMS REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod issues;
pub mod members;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// Generic success-flag response body
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
