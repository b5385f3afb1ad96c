/// Content Service Library
///
/// HTTP service exposing create/read/update/delete over a single collection
/// of content items (title, body, author, tags) kept in a document store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: request, storage and response types for content items
/// - `services`: validation and storage orchestration
/// - `db`: the `ContentStore` trait plus PostgreSQL and in-memory stores
/// - `middleware`: request metrics
/// - `error`: error types and their HTTP mapping
/// - `config`: configuration from environment variables
/// - `metrics`: Prometheus collectors
/// - `openapi`: OpenAPI document
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::ContentService;
