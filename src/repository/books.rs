//! Books repository for database operations.
//!
//! All calls go through the typed `Collection<Book>`, so documents are
//! (de)serialized by the driver; no raw document handling outside the
//! update clause.

use bson::{doc, oid::ObjectId};
use mongodb::{options::ReturnDocument, Collection, Database};
use tokio_stream::StreamExt;

use crate::{
    error::AppResult,
    models::book::{Book, UpdateBookRequest},
};

const COLLECTION_NAME: &str = "books";

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<Book>,
}

impl BooksRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// List all books, oldest first
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?;

        let mut books = Vec::new();
        while let Some(book) = cursor.next().await {
            books.push(book?);
        }

        Ok(books)
    }

    /// Get a book by id
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new book. The id must already be assigned by the caller.
    pub async fn insert(&self, book: Book) -> AppResult<Book> {
        self.collection.insert_one(&book).await?;
        Ok(book)
    }

    /// Replace the client-writable fields of a book and refresh its
    /// `updated_at`, returning the updated document, or `None` when no
    /// book matched.
    pub async fn update(
        &self,
        id: ObjectId,
        changes: &UpdateBookRequest,
    ) -> AppResult<Option<Book>> {
        let update = doc! {
            "$set": {
                "title": changes.title.as_str(),
                "author": changes.author.as_str(),
                "publish_year": changes.publish_year,
                "updated_at": bson::DateTime::now(),
            }
        };

        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    /// Delete a book by id, reporting whether a document matched
    pub async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
