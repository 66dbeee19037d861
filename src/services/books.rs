//! Books management service

use bson::oid::ObjectId;
use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBookRequest, UpdateBookRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.find_all().await
    }

    /// Get a book by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        let oid = parse_object_id(id)?;

        self.repository
            .books
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book
    pub async fn create_book(&self, request: CreateBookRequest) -> AppResult<Book> {
        request.validate()?;

        let now = Utc::now();
        let book = Book {
            id: Some(ObjectId::new()),
            title: request.title,
            author: request.author,
            publish_year: request.publish_year,
            created_at: now,
            updated_at: now,
        };

        self.repository.books.insert(book).await
    }

    /// Update an existing book
    pub async fn update_book(&self, id: &str, request: UpdateBookRequest) -> AppResult<Book> {
        request.validate()?;

        let oid = parse_object_id(id)?;

        self.repository
            .books
            .update(oid, &request)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Delete a book
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        let oid = parse_object_id(id)?;

        if !self.repository.books.delete(oid).await? {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        assert!(parse_object_id("not-an-object-id").is_err());
        assert!(parse_object_id("").is_err());
        // Too short, even though it is valid hex
        assert!(parse_object_id("abcdef").is_err());
    }
}
