//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record from the catalog.
///
/// `quantity` is the total number of copies owned; `available` the number of
/// copies currently not on loan. Invariant: `0 <= available <= quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
    pub available: i64,
}

/// Payload for creating or updating a book
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i64,
}
