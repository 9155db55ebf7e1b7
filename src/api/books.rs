//! Book API endpoints
//!
//! Every endpoint answers 200 with a JSON book (or list). Lookups that match
//! nothing return the empty book.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{models::Book, AppState};

use super::LenientJson;

/// List all books in stored order
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get the first book with the given ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details, or an empty book when not found", body = Book)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Book> {
    Json(state.services.books.get(&id).await)
}

/// Create a book under a server-assigned ID
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created", body = Book)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    LenientJson(data): LenientJson<Book>,
) -> Json<Book> {
    Json(state.services.books.create(data).await)
}

/// Replace a book, keeping its ID
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated, or an empty book when not found", body = Book)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    LenientJson(data): LenientJson<Book>,
) -> Json<Book> {
    Json(state.services.books.update(&id, data).await)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Deleted book, or an empty book when not found", body = Book)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Book> {
    Json(state.services.books.delete(&id).await)
}
