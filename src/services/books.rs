//! Book service
//!
//! Answers a miss with the empty book rather than an error, so the wire
//! contract stays a plain record for every outcome.

use crate::{models::Book, repository::Repository};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get(&self, id: &str) -> Book {
        self.repository.books.get(id).await.unwrap_or_else(|| {
            tracing::debug!(id, "Book not found");
            Book::default()
        })
    }

    pub async fn create(&self, data: Book) -> Book {
        let book = self.repository.books.create(data).await;
        tracing::info!(id = %book.id, title = %book.title, "Book created");
        book
    }

    /// Replace a book; the updated record moves to the end of the list
    pub async fn update(&self, id: &str, data: Book) -> Book {
        match self.repository.books.update(id, data).await {
            Some(book) => {
                tracing::info!(id, title = %book.title, "Book updated");
                book
            }
            None => {
                tracing::debug!(id, "Update skipped, book not found");
                Book::default()
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Book {
        match self.repository.books.delete(id).await {
            Some(book) => {
                tracing::info!(id, title = %book.title, "Book deleted");
                book
            }
            None => {
                tracing::debug!(id, "Delete skipped, book not found");
                Book::default()
            }
        }
    }
}
