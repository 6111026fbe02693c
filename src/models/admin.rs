//! Admin model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admin record; read-only seed data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Admin view with the password stripped
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminPublic {
    pub email: String,
    pub name: String,
}

impl Admin {
    pub fn into_public(self) -> AdminPublic {
        AdminPublic {
            email: self.email,
            name: self.name,
        }
    }
}
