//! API handlers for Book Server REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::Uri,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Largest request body buffered by the request log
const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// JSON body extractor that never rejects a malformed payload.
///
/// Content-Type is not checked. A body that fails to decode is replaced by
/// `T::default()`; only a body that cannot be read is an error.
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        let value = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!("Ignoring undecodable request body: {}", e);
            T::default()
        });

        Ok(LenientJson(value))
    }
}

/// Log every request with its headers and body
pub async fn log_request(request: Request, next: Next) -> AppResult<Response> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::info!(
        "\n{} {} {:?}\n{}\n\n{}",
        parts.method,
        parts.uri,
        parts.version,
        headers,
        String::from_utf8_lossy(&bytes)
    );

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = state.config.server.request_timeout();

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/api/books", get(books::list_books).post(books::create_book))
        .route(
            "/api/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .fallback(route_not_found)
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(middleware::from_fn(log_request))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Book};

    async fn extract(body: &'static str) -> Book {
        let request = axum::http::Request::builder()
            .body(Body::from(body))
            .unwrap();
        let LenientJson(book) = LenientJson::<Book>::from_request(request, &()).await.unwrap();
        book
    }

    #[tokio::test]
    async fn test_lenient_json_decodes_valid_body() {
        let book = extract(r#"{"isbn":"99","title":"X","author":{"firstname":"A","lastname":"B"}}"#).await;
        assert_eq!(book.isbn, "99");
        assert_eq!(book.title, "X");
        assert_eq!(book.author, Some(Author::new("A", "B")));
    }

    #[tokio::test]
    async fn test_lenient_json_falls_back_to_default() {
        assert!(extract("not json").await.is_empty());
        assert!(extract("").await.is_empty());
        assert!(extract(r#"{"title": 5}"#).await.is_empty());
    }

    #[tokio::test]
    async fn test_lenient_json_decoding_is_strict_per_field() {
        // A mistyped field discards the whole payload
        assert!(extract(r#"{"isbn":"99","title":5}"#).await.is_empty());
        // Trailing bytes after the object make the body undecodable
        assert!(extract(r#"{"isbn":"99"} trailing"#).await.is_empty());
        // Keys are case-sensitive; unknown keys are ignored
        let book = extract(r#"{"Title":"Upper","isbn":"99"}"#).await;
        assert_eq!(book.title, "");
        assert_eq!(book.isbn, "99");
    }
}
