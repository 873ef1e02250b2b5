//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, issues, stats, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarium API",
        version = "0.1.0",
        description = "Library Management System REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Students
        students::list_students,
        students::create_student,
        // Issues
        issues::issue_book,
        issues::list_issues,
        issues::return_book,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::MeResponse,
            crate::models::admin::AdminInfo,
            // Catalog
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::student::Student,
            crate::models::student::StudentPayload,
            // Issues
            crate::models::issue::Issue,
            crate::models::issue::IssueStatus,
            crate::models::issue::ActiveIssue,
            issues::IssueRequest,
            issues::IssueResponse,
            issues::ReturnRequest,
            issues::ReturnResponse,
            // Stats
            stats::StatsResponse,
            // Health
            health::HealthResponse,
            // Generic
            crate::api::SuccessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "students", description = "Student registry"),
        (name = "issues", description = "Book issue and return"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
