//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{BookResponse, CreateBookRequest, UpdateBookRequest},
};

/// List response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    /// Number of books returned
    pub count: usize,
    /// The books themselves
    pub data: Vec<BookResponse>,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list_books().await?;

    let data: Vec<BookResponse> = books.into_iter().map(Into::into).collect();

    Ok(Json(BookListResponse {
        count: data.len(),
        data,
    }))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id (hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 400, description = "Invalid book id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get_book(&id).await?;
    Ok(Json(book.into()))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let created = state.services.books.create_book(request).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id (hex ObjectId)")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    let updated = state.services.books.update_book(&id, request).await?;
    Ok(Json(updated.into()))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id (hex ObjectId)")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid book id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete_book(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
