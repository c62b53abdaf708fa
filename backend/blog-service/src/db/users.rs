use crate::error::{AppError, Result};
use crate::models::{User, UserResponse};
use sqlx::SqlitePool;

/// Insert a new user row
///
/// The unique constraint on `username` is the only duplicate check; a
/// violation maps to [`AppError::UsernameTaken`].
pub async fn create_user(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<User> {
    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING id, username, password_hash",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::UsernameTaken),
        Err(e) => Err(e.into()),
    }
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List all users without their password hashes
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserResponse>> {
    let users =
        sqlx::query_as::<_, UserResponse>("SELECT id, username FROM users ORDER BY id ASC")
            .fetch_all(pool)
            .await?;

    Ok(users)
}

/// Delete a user by id, returning whether a row was removed
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
