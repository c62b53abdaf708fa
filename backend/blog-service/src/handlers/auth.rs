/// Authentication handlers
use crate::error::Result;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::services::IdentityService;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Register endpoint handler
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn register(
    identity: web::Data<IdentityService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    // A whitespace-only username trims to empty and fails validation
    let req = RegisterRequest {
        username: payload.username.trim().to_string(),
        password: payload.password.clone(),
    };
    req.validate()?;

    let user = identity.register(&req.username, &req.password).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Login endpoint handler
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User logged in", body = LoginResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    identity: web::Data<IdentityService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let req = LoginRequest {
        username: payload.username.trim().to_string(),
        password: payload.password.clone(),
    };
    req.validate()?;

    let response = identity.login(&req.username, &req.password).await?;

    Ok(HttpResponse::Ok().json(response))
}
