use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Comment model
///
/// `post_id` references an existing post; the foreign key is enforced with
/// cascade delete, so a comment cannot outlive its post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a comment (the post id comes from the path)
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
}

/// Request body for updating a comment
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}
