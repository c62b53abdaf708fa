use crate::error::AppError;
use crate::security::TokenService;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error, HttpMessage,
};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Identity extracted from a validated token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
}

/// JWT Authentication Middleware
///
/// Guards a scope so that every request inside it carries a valid
/// `Authorization: Bearer <token>` header. Rejections are answered directly
/// with the error body; the wrapped service is never called. The token
/// service is injected at construction; the middleware holds no global state.
pub struct JwtAuthMiddleware {
    tokens: TokenService,
}

impl JwtAuthMiddleware {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = JwtAuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
    tokens: TokenService,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = self.tokens.clone();

        Box::pin(async move {
            match authenticate(&tokens, &req) {
                Ok(user) => {
                    // Insert the authenticated identity into request extensions
                    req.extensions_mut().insert(user);

                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    tracing::warn!("unauthorized request: {}", e);
                    let response = e.error_response().map_into_right_body();
                    Ok(req.into_response(response))
                }
            }
        })
    }
}

/// Resolve the bearer token on a request into an authenticated identity
fn authenticate(tokens: &TokenService, req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    // Anything other than a Bearer scheme counts as no token at all
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MissingToken)?;

    let claims = tokens.validate(token)?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::InvalidToken)?;

    Ok(AuthenticatedUser {
        id: user_id,
        username: claims.username,
    })
}

/// FromRequest implementation for AuthenticatedUser
impl actix_web::FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::MissingToken.into())),
        }
    }
}
