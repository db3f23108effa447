mod auth;
mod health_check;

pub use auth::{admin_ping, get_current_identity, refresh, IdentityResponse, RefreshRequest};
pub use health_check::health_check;
