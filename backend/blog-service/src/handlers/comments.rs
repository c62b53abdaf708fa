/// Comment handlers - HTTP endpoints for comment operations
use crate::error::{AppError, Result};
use crate::models::{Comment, CreateCommentRequest, UpdateCommentRequest};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Create a comment on a post
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn create_comment(
    comments: web::Data<CommentService>,
    post_id: web::Path<i64>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let comment = comments
        .create_comment(*post_id, &payload.content, &payload.username)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Comments for a post in creation order
///
/// A post with no comments and a nonexistent post both yield an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments on the post", body = [Comment]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_comments(
    comments: web::Data<CommentService>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let comments = comments.comments_for_post(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Update a comment's content
#[utoipa::path(
    put,
    path = "/api/v1/comments/{comment_id}",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("comment_id" = i64, Path, description = "Comment ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated"),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn update_comment(
    comments: web::Data<CommentService>,
    comment_id: web::Path<i64>,
    payload: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let updated = comments.update_comment(*comment_id, &payload.content).await?;

    if updated {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(AppError::NotFound("Comment not found".to_string()))
    }
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{comment_id}",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("comment_id" = i64, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn delete_comment(
    comments: web::Data<CommentService>,
    comment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let deleted = comments.delete_comment(*comment_id).await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Comment not found".to_string()))
    }
}
