//! In-memory book store

use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{book::seed_books, Book};

/// Exclusive upper bound of generated identifiers
const ID_RANGE: u32 = 10_000_000;

/// Ordered collection of books, shared by every request handler.
///
/// Lookups scan in insertion order and stop at the first matching id, so a
/// later record sharing an id with an earlier one is unreachable by id.
/// Each mutation holds the write lock across its scan and its change.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

/// Random decimal id in `[0, 10_000_000)`. Collisions with stored ids are not checked.
pub fn generate_id() -> String {
    rand::thread_rng().gen_range(0..ID_RANGE).to_string()
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Store holding the startup demo books
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// All books in stored order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// First book with the given id
    pub async fn get(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Append a book under a fresh id, ignoring any id it carries
    pub async fn create(&self, mut book: Book) -> Book {
        book.id = generate_id();
        self.books.write().await.push(book.clone());
        book
    }

    /// Replace the first book with the given id.
    ///
    /// The old record is removed and the new one appended, so an updated
    /// book moves to the end of the list. The stored id is kept.
    pub async fn update(&self, id: &str, mut book: Book) -> Option<Book> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|b| b.id == id)?;
        let previous = books.remove(index);
        book.id = previous.id;
        books.push(book.clone());
        Some(book)
    }

    /// Remove and return the first book with the given id
    pub async fn delete(&self, id: &str) -> Option<Book> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|b| b.id == id)?;
        Some(books.remove(index))
    }
}
