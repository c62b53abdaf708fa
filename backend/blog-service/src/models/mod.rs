/// Data models for the blog service
///
/// Entities map 1:1 onto storage rows (`sqlx::FromRow`); request DTOs carry
/// `validator` rules and every wire-visible type derives `utoipa::ToSchema`
/// for the OpenAPI document.
pub mod comment;
pub mod post;
pub mod user;

pub use comment::{Comment, CreateCommentRequest, UpdateCommentRequest};
pub use post::{CreatePostRequest, Post, PostWithComments, UpdatePostRequest};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse};
