//! Authentication endpoints

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::AdminInfo};

use super::{bearer_token, SuccessResponse};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the session token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    /// Session token, sent back as `Authorization: Bearer <token>`
    pub token: String,
    pub user: AdminInfo,
}

/// Current-session response
#[derive(Serialize, ToSchema)]
pub struct MeResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminInfo>,
}

/// Authenticate with admin credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, user) = state
        .services
        .auth
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        user,
    }))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session ended", body = SuccessResponse)
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    headers: HeaderMap,
) -> Json<SuccessResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.services.auth.logout(token);
    }
    Json(SuccessResponse::ok())
}

/// Report whether the caller holds a valid session
#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session state", body = MeResponse)
    )
)]
pub async fn me(State(state): State<crate::AppState>, headers: HeaderMap) -> Json<MeResponse> {
    let user = bearer_token(&headers).and_then(|token| state.services.auth.authenticate(token));

    Json(MeResponse {
        authenticated: user.is_some(),
        user,
    })
}
