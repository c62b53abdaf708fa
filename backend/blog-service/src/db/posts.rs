use crate::error::Result;
use crate::models::Post;
use sqlx::SqlitePool;

pub async fn create_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    username: &str,
) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(
        "INSERT INTO posts (title, content, username) VALUES (?, ?, ?) \
         RETURNING id, username, title, content, created_at",
    )
    .bind(title)
    .bind(content)
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        "SELECT id, username, title, content, created_at FROM posts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List all posts in creation order
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        "SELECT id, username, title, content, created_at FROM posts ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Update a post's mutable fields, returning whether a row matched
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    content: &str,
    username: &str,
) -> Result<bool> {
    let result = sqlx::query("UPDATE posts SET title = ?, content = ?, username = ? WHERE id = ?")
        .bind(title)
        .bind(content)
        .bind(username)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a post by id; comments go with it via the cascading foreign key
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
