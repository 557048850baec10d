//! Bookshelf GraphQL Demo Server
//!
//! Serves a fixed in-memory catalog of books, reviews and authors through a
//! single GraphQL query endpoint.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub schema: graphql::AppSchema,
}
