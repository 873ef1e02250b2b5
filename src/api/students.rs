//! Student registry endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Student, StudentPayload},
};

use super::{CurrentAdmin, SuccessResponse};

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All registered students", body = Vec<Student>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_students(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.catalog.list_students().await?;
    Ok(Json(students))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    security(("bearer_auth" = [])),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student registered", body = SuccessResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_student(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<StudentPayload>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.create_student(payload).await?;
    Ok(Json(SuccessResponse::ok()))
}
