/// Business logic services
///
/// Each service owns a pool handle and is injected into the handlers as
/// application data at startup.
pub mod comments;
pub mod identity;
pub mod posts;

pub use comments::CommentService;
pub use identity::IdentityService;
pub use posts::PostService;
