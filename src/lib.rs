//! Book Server
//!
//! A small REST JSON API serving create/read/update/delete operations over an
//! in-memory, ordered collection of book records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{books::BooksRepository, Repository};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state, loading the demo books when `store.seed` is set
    pub fn new(config: AppConfig) -> Self {
        let books = if config.store.seed {
            BooksRepository::seeded()
        } else {
            BooksRepository::default()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(Repository::new(books))),
        }
    }
}
