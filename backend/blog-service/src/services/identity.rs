/// Identity service - account registration, login, and user management
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{LoginResponse, UserResponse};
use crate::security::{self, TokenService};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct IdentityService {
    pool: SqlitePool,
    tokens: TokenService,
}

impl IdentityService {
    pub fn new(pool: SqlitePool, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }

    /// Register a new account
    ///
    /// Uniqueness is left to the database constraint; there is no separate
    /// existence check, so concurrent registrations cannot race past it.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserResponse> {
        let password_hash = security::hash_password(password)?;
        let user = db::users::create_user(&self.pool, username, &password_hash).await?;

        tracing::info!(user_id = user.id, username = %user.username, "user registered");

        Ok(UserResponse::from(user))
    }

    /// Authenticate a user and issue an access token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        // An unknown username and a wrong password produce the same error
        let user = match db::users::find_by_username(&self.pool, username).await? {
            Some(user) => user,
            None => return Err(AppError::InvalidCredentials),
        };

        if !security::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(user.id, &user.username)?;

        tracing::info!(user_id = user.id, username = %user.username, "user logged in");

        Ok(LoginResponse {
            user_id: user.id,
            username: user.username,
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.expiry_seconds(),
        })
    }

    /// List all registered users without credential material
    pub async fn list_users(&self) -> Result<Vec<UserResponse>> {
        db::users::list_users(&self.pool).await
    }

    /// Delete a user by ID, returning whether the user existed
    pub async fn delete_user(&self, id: i64) -> Result<bool> {
        db::users::delete_user(&self.pool, id).await
    }
}
