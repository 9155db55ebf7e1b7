//! Book model and seed data

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Author;

/// Book record
///
/// Missing fields decode to their zero value and unknown fields are ignored.
/// `Book::default()` doubles as the "not found" answer of the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Server-assigned identifier; ignored on create and update
    pub id: String,
    pub isbn: String,
    pub title: String,
    /// Serialized as `null` when absent
    pub author: Option<Author>,
}

impl Book {
    pub fn new(id: &str, isbn: &str, title: &str, author: Option<Author>) -> Self {
        Self {
            id: id.to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            author,
        }
    }

    /// True for the zero-value record
    pub fn is_empty(&self) -> bool {
        *self == Book::default()
    }
}

/// Books loaded at startup. Ids "3" are duplicated on purpose.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "01", "The Looming Tower", Some(Author::new("Lawrence", "Wright"))),
        Book::new("2", "23", "The Sympathiser", Some(Author::new("Viet Thanhs", "Nguyen"))),
        Book::new("3", "45", "Catch-22", Some(Author::new("Joseph", "Wright"))),
        Book::new("3", "67", "Barbarian Days", Some(Author::new("William", "Finnegan"))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_book_wire_shape() {
        let value = serde_json::to_value(Book::default()).unwrap();
        assert_eq!(value, json!({"id": "", "isbn": "", "title": "", "author": null}));
        assert!(Book::default().is_empty());
    }

    #[test]
    fn test_book_wire_shape() {
        let book = Book::new("7", "99", "X", Some(Author::new("Ann", "Lee")));
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "7",
                "isbn": "99",
                "title": "X",
                "author": {"firstname": "Ann", "lastname": "Lee"}
            })
        );
        assert!(!book.is_empty());
    }

    #[test]
    fn test_lenient_decode() {
        let book: Book = serde_json::from_str(r#"{"title": "Only a title", "pages": 12}"#).unwrap();
        assert_eq!(book.title, "Only a title");
        assert_eq!(book.id, "");
        assert_eq!(book.isbn, "");
        assert!(book.author.is_none());

        let book: Book = serde_json::from_str(r#"{"author": {"lastname": "Heller"}}"#).unwrap();
        assert_eq!(book.author, Some(Author::new("", "Heller")));
    }

    #[test]
    fn test_seed_order() {
        let titles: Vec<_> = seed_books().into_iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            ["The Looming Tower", "The Sympathiser", "Catch-22", "Barbarian Days"]
        );
    }
}
