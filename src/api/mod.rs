//! API handlers for the Librarium REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod issues;
pub mod openapi;
pub mod stats;
pub mod students;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::AdminInfo, AppState};

/// Generic success body: `{"success": true}`
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Extract the bearer token from an Authorization header, if present
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor for the admin authenticated by a session token
pub struct CurrentAdmin(pub AdminInfo);

#[async_trait]
impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let admin = state
            .services
            .auth
            .authenticate(token)
            .ok_or_else(|| AppError::Authentication("Invalid or expired session".to_string()))?;

        Ok(CurrentAdmin(admin))
    }
}
