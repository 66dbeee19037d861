//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    // CORS policy comes from configuration; "*" entries select the
    // permissive wildcard mode
    let cors = state.config.cors.layer()?;

    // Books route table, mounted under the /books prefix
    let books = Router::new()
        .route("/", get(books::list_books))
        .route("/", post(books::create_book))
        .route("/:id", get(books::get_book))
        .route("/:id", put(books::update_book))
        .route("/:id", delete(books::delete_book));

    let app = Router::new()
        // Welcome
        .route("/", get(health::welcome))
        // Health checks
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .nest("/books", books)
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Ok(Router::new()
        .merge(app)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
