/// User administration handlers
use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::UserResponse;
use crate::services::IdentityService;
use actix_web::{web, HttpResponse};

/// List all registered users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All registered users", body = [UserResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_users(identity: web::Data<IdentityService>) -> Result<HttpResponse> {
    let users = identity.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    identity: web::Data<IdentityService>,
    user_id: web::Path<i64>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse> {
    let deleted = identity.delete_user(*user_id).await?;

    if deleted {
        tracing::info!(user_id = *user_id, deleted_by = caller.id, "user deleted");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
