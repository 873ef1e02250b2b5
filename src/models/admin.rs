//! Admin account model

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Admin account row. The `password` column holds an argon2 hash,
/// never a plaintext password.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Public view of an admin account, safe to return to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminInfo {
    pub id: i64,
    pub username: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
        }
    }
}
