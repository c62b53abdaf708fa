/// Post handlers - HTTP endpoints for post operations
use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::{CreatePostRequest, Post, PostWithComments, UpdatePostRequest};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "Posts",
    security(("bearer_auth" = [])),
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_post(
    posts: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let post = posts
        .create_post(&payload.title, &payload.content, &payload.username)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// List all posts with their comments
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "Posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All posts in creation order", body = [PostWithComments]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_posts(posts: web::Data<PostService>) -> Result<HttpResponse> {
    let posts = posts.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID with its comments
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post with embedded comments", body = PostWithComments),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    posts: web::Data<PostService>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    match posts.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Update a post
#[utoipa::path(
    put,
    path = "/api/v1/posts/{post_id}",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated"),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn update_post(
    posts: web::Data<PostService>,
    post_id: web::Path<i64>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let updated = posts
        .update_post(*post_id, &payload.title, &payload.content, &payload.username)
        .await?;

    if updated {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}

/// Delete a post and its comments
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    posts: web::Data<PostService>,
    post_id: web::Path<i64>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse> {
    let deleted = posts.delete_post(*post_id).await?;

    if deleted {
        tracing::info!(post_id = *post_id, deleted_by = caller.id, "post deleted");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}
