/// HTTP handlers for the blog API
///
/// This module contains handlers for:
/// - Auth: registration and login
/// - Posts: create, read, update, delete posts with embedded comments
/// - Comments: create, read, update, delete comments on posts
/// - Users: user administration
/// - Health: service health check
pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;
pub mod users;

// Re-export handler functions at module level
pub use auth::{login, register};
pub use comments::{create_comment, delete_comment, get_comments, update_comment};
pub use health::health;
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
pub use users::{delete_user, list_users};
