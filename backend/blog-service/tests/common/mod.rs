/// Test fixtures and utilities for integration tests
/// Provides database setup, app construction, and auth helpers
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use blog_service::handlers;
use blog_service::middleware::JwtAuthMiddleware;
use blog_service::security::TokenService;
use blog_service::services::{CommentService, IdentityService, PostService};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

// ============================================
// Database Setup
// ============================================

/// Create an in-memory database pool with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    // A single connection keeps the in-memory database alive for the
    // whole test; separate connections would each get their own store.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    blog_service::db::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

// ============================================
// App Construction
// ============================================

/// Build the application with the full route tree wired to the given pool
pub async fn setup_test_app(
    pool: SqlitePool,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    let tokens = TokenService::new(TEST_JWT_SECRET, 3600);
    let identity = web::Data::new(IdentityService::new(pool.clone(), tokens.clone()));
    let posts = web::Data::new(PostService::new(pool.clone()));
    let comments = web::Data::new(CommentService::new(pool.clone()));
    let pool_data = web::Data::new(pool);

    test::init_service(
        App::new()
            .app_data(identity)
            .app_data(posts)
            .app_data(comments)
            .app_data(pool_data)
            .route("/api/v1/health", web::get().to(handlers::health))
            .service(
                web::scope("/api/v1/auth")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login)),
            )
            .service(
                web::scope("/api/v1")
                    .wrap(JwtAuthMiddleware::new(tokens))
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_posts))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::put().to(handlers::update_post))
                                    .route(web::delete().to(handlers::delete_post)),
                            )
                            .service(
                                web::resource("/{post_id}/comments")
                                    .route(web::get().to(handlers::get_comments))
                                    .route(web::post().to(handlers::create_comment)),
                            ),
                    )
                    .service(
                        web::scope("/comments").service(
                            web::resource("/{comment_id}")
                                .route(web::put().to(handlers::update_comment))
                                .route(web::delete().to(handlers::delete_comment)),
                        ),
                    )
                    .service(
                        web::scope("/users")
                            .service(web::resource("").route(web::get().to(handlers::list_users)))
                            .service(
                                web::resource("/{user_id}")
                                    .route(web::delete().to(handlers::delete_user)),
                            ),
                    ),
            ),
    )
    .await
}

// ============================================
// Auth Helpers
// ============================================

/// Authorization header tuple for a bearer token
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Register a user and log in, returning the access token
pub async fn register_and_login<S>(app: &S, username: &str, password: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({"username": username, "password": password}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "registration should succeed");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"username": username, "password": password}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 200, "login should succeed");

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["access_token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Create a post through the API, returning its id
pub async fn create_post<S>(app: &S, token: &str, title: &str, content: &str, author: &str) -> i64
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(bearer(token))
        .set_json(serde_json::json!({
            "title": title,
            "content": content,
            "username": author,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "post creation should succeed");

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["id"].as_i64().expect("created post carries an id")
}
