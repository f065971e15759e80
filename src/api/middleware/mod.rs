//! API middleware components

pub mod admin_auth;
pub mod logging;
pub mod user_auth;

pub use admin_auth::{authorize_admin, RequireAdmin};
pub use logging::logging_middleware;
pub use user_auth::{extract_bearer_token, RequireUser};
