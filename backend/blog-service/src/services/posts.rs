/// Post service - post management with embedded comments
use crate::db;
use crate::error::Result;
use crate::models::{Comment, Post, PostWithComments};
use sqlx::SqlitePool;
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub async fn create_post(&self, title: &str, content: &str, username: &str) -> Result<Post> {
        db::posts::create_post(&self.pool, title, content, username).await
    }

    /// Get a post by ID with its comments embedded in creation order
    pub async fn get_post(&self, post_id: i64) -> Result<Option<PostWithComments>> {
        let post = match db::posts::find_by_id(&self.pool, post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let comments = db::comments::comments_for_post(&self.pool, post_id).await?;

        Ok(Some(PostWithComments::new(post, comments)))
    }

    /// List all posts in creation order, each with its comments embedded
    ///
    /// Posts without comments carry an empty list, never a placeholder entry.
    pub async fn list_posts(&self) -> Result<Vec<PostWithComments>> {
        let posts = db::posts::list_posts(&self.pool).await?;
        let comments = db::comments::list_comments(&self.pool).await?;

        let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            by_post.entry(comment.post_id).or_default().push(comment);
        }

        let posts = posts
            .into_iter()
            .map(|post| {
                let comments = by_post.remove(&post.id).unwrap_or_default();
                PostWithComments::new(post, comments)
            })
            .collect();

        Ok(posts)
    }

    /// Update a post's title, content, and author attribution
    pub async fn update_post(
        &self,
        post_id: i64,
        title: &str,
        content: &str,
        username: &str,
    ) -> Result<bool> {
        db::posts::update_post(&self.pool, post_id, title, content, username).await
    }

    /// Delete a post together with its comments
    pub async fn delete_post(&self, post_id: i64) -> Result<bool> {
        db::posts::delete_post(&self.pool, post_id).await
    }
}
