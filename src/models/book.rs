//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Book record as stored in the catalog collection
///
/// `available` counts the copies currently on the shelf; it starts equal to
/// `quantity` and is decremented on every checkout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: u32,
    pub available: u32,
}

/// New book payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: u32,
}

impl CreateBook {
    /// Materialize a catalog record with a fresh identifier and a full shelf
    pub fn into_book(self) -> Book {
        Book {
            id: Uuid::new_v4(),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            available: self.quantity,
            quantity: self.quantity,
        }
    }
}
