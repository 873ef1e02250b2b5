//! Student model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Student record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub phone: String,
}

/// Payload for registering a student
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub phone: String,
}
