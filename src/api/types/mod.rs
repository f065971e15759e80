//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod resources;

pub use error::{ApiError, ApiErrorResponse};
pub use json::{Json, JsonRejection};
pub use resources::{TeamResponse, TokenResponse, UserResponse};
