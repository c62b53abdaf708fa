use crate::error::{AppError, Result};
use crate::models::Comment;
use sqlx::SqlitePool;

/// Insert a comment under a post
///
/// A foreign key violation means the post does not exist, which callers see
/// as a not-found error rather than a storage failure.
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    content: &str,
    username: &str,
) -> Result<Comment> {
    let result = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (post_id, content, username) VALUES (?, ?, ?) \
         RETURNING id, post_id, username, content, created_at",
    )
    .bind(post_id)
    .bind(content)
    .bind(username)
    .fetch_one(pool)
    .await;

    match result {
        Ok(comment) => Ok(comment),
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            Err(AppError::NotFound("Post not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Comments for one post in creation order
pub async fn comments_for_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, post_id, username, content, created_at FROM comments \
         WHERE post_id = ? ORDER BY id ASC",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// All comments grouped by post, each group in creation order
pub async fn list_comments(pool: &SqlitePool) -> Result<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, post_id, username, content, created_at FROM comments \
         ORDER BY post_id ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Update a comment's content, returning whether a row matched
pub async fn update_comment(pool: &SqlitePool, id: i64, content: &str) -> Result<bool> {
    let result = sqlx::query("UPDATE comments SET content = ? WHERE id = ?")
        .bind(content)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_comment(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
