//! Issue and return endpoints

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::ActiveIssue};

use super::CurrentAdmin;

/// Issue request
#[derive(Deserialize, ToSchema)]
pub struct IssueRequest {
    pub student_id: i64,
    pub book_id: i64,
    /// Date the book leaves the library (ISO 8601, `YYYY-MM-DD`)
    pub issue_date: NaiveDate,
}

/// Issue response with the created record's id
#[derive(Serialize, ToSchema)]
pub struct IssueResponse {
    pub success: bool,
    pub issue_id: i64,
}

/// Return request
#[derive(Deserialize, ToSchema)]
pub struct ReturnRequest {
    pub issue_id: i64,
    /// Date the book comes back (ISO 8601, `YYYY-MM-DD`)
    pub return_date: NaiveDate,
}

/// Return response with the computed fine
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub success: bool,
    pub fine: i64,
}

/// Issue a book to a student
#[utoipa::path(
    post,
    path = "/issue",
    tag = "issues",
    security(("bearer_auth" = [])),
    request_body = IssueRequest,
    responses(
        (status = 200, description = "Book issued", body = IssueResponse),
        (status = 400, description = "Book not available", body = crate::error::ErrorResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn issue_book(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(request): Json<IssueRequest>,
) -> AppResult<Json<IssueResponse>> {
    let issue_id = state
        .services
        .ledger
        .issue_book(request.student_id, request.book_id, request.issue_date)
        .await?;

    Ok(Json(IssueResponse {
        success: true,
        issue_id,
    }))
}

/// List open issues with borrower and book details
#[utoipa::path(
    get,
    path = "/issues",
    tag = "issues",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active issues", body = Vec<ActiveIssue>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_issues(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> AppResult<Json<Vec<ActiveIssue>>> {
    let issues = state.services.ledger.active_issues().await?;
    Ok(Json(issues))
}

/// Return an issued book
#[utoipa::path(
    post,
    path = "/return",
    tag = "issues",
    security(("bearer_auth" = [])),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "Issue record not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Issue already returned")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let fine = state
        .services
        .ledger
        .return_book(request.issue_id, request.return_date)
        .await?;

    Ok(Json(ReturnResponse {
        success: true,
        fine,
    }))
}
