//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, BookPayload},
};

use super::{CurrentAdmin, SuccessResponse};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All books in the catalog", body = Vec<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book created", body = SuccessResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.create_book(payload).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Update a book's details and quantity
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = SuccessResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<i64>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.update_book(id, payload).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Remove a book from the catalog
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = SuccessResponse),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book has active issues")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
