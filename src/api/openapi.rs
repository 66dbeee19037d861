//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "Book Store REST API",
        license(name = "MIT")
    ),
    paths(
        // Health
        health::welcome,
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::BookResponse,
            crate::models::book::CreateBookRequest,
            crate::models::book::UpdateBookRequest,
            books::BookListResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Welcome and health check endpoints"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
