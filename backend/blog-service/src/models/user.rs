use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User model - core identity entity
///
/// The stored record carries the password hash and is never serialized to
/// API clients; responses go through [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Public view of a user (id and username only)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// User registration request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, max = 128, message = "password must not be empty"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, max = 128, message = "password must not be empty"))]
    pub password: String,
}

/// Successful login response carrying the session token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user_id: i64,
    pub username: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
