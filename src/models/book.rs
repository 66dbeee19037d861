//! Book model and related API types.
//!
//! `Book` is the persisted document shape; the API never exposes it
//! directly. Requests come in as `CreateBookRequest`/`UpdateBookRequest`
//! and responses go out as `BookResponse` with the ObjectId rendered as a
//! hex string and timestamps as RFC 3339.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book document as stored in the `books` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Book representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    /// Book id (hex ObjectId)
    pub id: String,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: book.title,
            author: book.author,
            publish_year: book.publish_year,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(range(min = 0, max = 9999, message = "publish_year must be between 0 and 9999"))]
    pub publish_year: i32,
}

/// Update book request. All fields are required, matching the create
/// request: an update replaces the client-writable fields as a whole.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(range(min = 0, max = 9999, message = "publish_year must be between 0 and 9999"))]
    pub publish_year: i32,
}
