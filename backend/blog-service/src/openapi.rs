/// OpenAPI documentation for the Blog Service
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::models::{
    Comment, CreateCommentRequest, CreatePostRequest, LoginRequest, LoginResponse, Post,
    PostWithComments, RegisterRequest, UpdateCommentRequest, UpdatePostRequest, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "1.0.0",
        description = "CRUD REST API for a blogging application: user registration and login, posts, and comments attached to posts. All content and user administration routes require a JWT bearer token obtained at login.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::posts::create_post,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::get_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::get_comments,
        crate::handlers::comments::update_comment,
        crate::handlers::comments::delete_comment,
        crate::handlers::users::list_users,
        crate::handlers::users::delete_user,
        crate::handlers::health::health,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        UserResponse,
        Post,
        PostWithComments,
        CreatePostRequest,
        UpdatePostRequest,
        Comment,
        CreateCommentRequest,
        UpdateCommentRequest
    )),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Posts", description = "Post creation, retrieval, updates, and deletion"),
        (name = "Comments", description = "Comment management on posts"),
        (name = "Users", description = "User administration"),
        (name = "Health", description = "Service health checks"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token obtained from the login endpoint"))
                        .build(),
                ),
            )
        }
    }
}
