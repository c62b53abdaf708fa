use crate::models::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Post model
///
/// `username` is the denormalized author name, not a foreign key;
/// `created_at` is set by the storage layer at insertion and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    pub id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post merged with all comments referencing it, in creation order
///
/// A post without comments embeds an empty array, never null.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostWithComments {
    pub id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl PostWithComments {
    pub fn new(post: Post, comments: Vec<Comment>) -> Self {
        Self {
            id: post.id,
            username: post.username,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            comments,
        }
    }
}

/// Request body for creating a post
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
}

/// Request body for updating a post (overwrites all writable fields)
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
}
