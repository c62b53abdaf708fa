/// Blog Service Library
///
/// A CRUD REST API for a blogging application: users register and log in,
/// create posts, and attach comments to posts. Protected routes are guarded
/// by JWT bearer authentication.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers per resource
/// - `models`: Entities and request/response DTOs
/// - `services`: Business logic layer
/// - `db`: Database access layer (SQLite via sqlx)
/// - `security`: Password hashing and token signing
/// - `middleware`: JWT authentication guard
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod security;
pub mod services;

pub use config::Settings;
pub use error::{AppError, Result};
