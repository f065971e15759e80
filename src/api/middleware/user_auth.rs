//! Bearer token authentication

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Identity;

/// Extractor that requires a valid bearer token.
///
/// On success the decoded [`Identity`] is also stored in the request
/// extensions, where later stages such as [`super::RequireAdmin`] read it.
#[derive(Debug, Clone)]
pub struct RequireUser(pub Identity);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let identity = state.jwt_service.validate(token).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            ApiError::unauthorized("invalid token")
        })?;

        debug!(user_id = %identity.id, role = %identity.role, "Authenticated request");

        parts.extensions.insert(identity.clone());

        Ok(RequireUser(identity))
    }
}

/// Extract the token from `Authorization`.
///
/// The header is split on the literal `"Bearer "` and must yield exactly
/// two pieces; the second is the token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ApiError::unauthorized("missing token")),
    };

    let raw = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid token format"))?;

    let mut pieces = raw.split("Bearer ");
    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(_), Some(token), None) => Ok(token),
        _ => Err(ApiError::unauthorized("invalid token format")),
    }
}
