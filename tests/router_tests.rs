//! In-process router tests.
//!
//! The MongoDB driver connects lazily, so the full router can be built
//! without a running database and every handler path that does not reach
//! the repository can be exercised through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookstore_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

async fn test_app() -> Router {
    let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("Failed to build MongoDB client");
    let db = client.database("bookstore_test");

    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::new(db))),
    };

    api::create_router(state).expect("Failed to build router")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}

#[tokio::test]
async fn test_welcome() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to My Mern Stack Project");
}

#[tokio::test]
async fn test_welcome_ignores_request_headers() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("Origin", "http://example.com")
                .header("X-Anything", "whatever")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to My Mern Stack Project");
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_rejects_post() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/books")
                .header("Origin", "http://example.com")
                .header("Access-Control-Request-Method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_header_on_plain_request() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("Origin", "http://another-origin.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_create_book_empty_title_is_400() {
    let app = test_app().await;

    // Validation runs before any database call
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/books")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "title": "", "author": "Frank Herbert", "publish_year": 1965 })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn test_create_book_missing_fields_is_422() {
    let app = test_app().await;

    // Missing required fields are rejected by deserialization
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/books")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "title": "Dune" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_book_requires_json_content_type() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/books")
                .body(Body::from(
                    json!({ "title": "Dune", "author": "Frank Herbert", "publish_year": 1965 })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_book_invalid_id_is_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/books/not-an-object-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid book id"));
}

#[tokio::test]
async fn test_update_book_invalid_id_is_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/books/xyz")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "title": "Dune", "author": "Frank Herbert", "publish_year": 1965 })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_update_book_empty_author_is_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/books/507f1f77bcf86cd799439011")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "title": "Dune", "author": "", "publish_year": 1965 }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn test_delete_book_invalid_id_is_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/books/xyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "Bookstore API");
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/books/{id}"].is_object());
}
