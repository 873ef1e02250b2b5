//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::CurrentAdmin;

/// Dashboard counters
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Sum of copies owned across all books
    #[serde(rename = "totalBooks")]
    pub total_books: i64,
    /// Number of registered students
    #[serde(rename = "totalStudents")]
    pub total_students: i64,
    /// Number of issues currently out
    #[serde(rename = "issuedBooks")]
    pub issued_books: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = StatsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
