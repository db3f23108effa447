/// Middleware module
///
/// Bearer-token authentication and role guards.

mod jwt_middleware;

pub use jwt_middleware::{bearer_token, JwtMiddleware};
