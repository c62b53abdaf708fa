/// Request-level middleware
pub mod jwt_auth;

pub use jwt_auth::{AuthenticatedUser, JwtAuthMiddleware};
