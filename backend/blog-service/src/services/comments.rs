/// Comment service - comments attached to posts
use crate::db;
use crate::error::Result;
use crate::models::Comment;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a comment under a post
    ///
    /// Commenting on a nonexistent post fails with a not-found error raised
    /// from the foreign key constraint.
    pub async fn create_comment(
        &self,
        post_id: i64,
        content: &str,
        username: &str,
    ) -> Result<Comment> {
        db::comments::create_comment(&self.pool, post_id, content, username).await
    }

    /// Comments for a post in creation order
    pub async fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        db::comments::comments_for_post(&self.pool, post_id).await
    }

    /// Update a comment's content, returning whether the comment existed
    pub async fn update_comment(&self, comment_id: i64, content: &str) -> Result<bool> {
        db::comments::update_comment(&self.pool, comment_id, content).await
    }

    /// Delete a comment by ID, returning whether the comment existed
    pub async fn delete_comment(&self, comment_id: i64) -> Result<bool> {
        db::comments::delete_comment(&self.pool, comment_id).await
    }
}
