//! Admin authorization

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Identity;

use super::user_auth::RequireUser;

/// Extractor that requires an authenticated identity with the admin role.
///
/// Authentication always runs first, so a bad token is reported as 401
/// before the role is looked at.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Identity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        RequireUser::from_request_parts(parts, state).await?;

        let identity = authorize_admin(parts.extensions.get::<Identity>())?;

        debug!(user_id = %identity.id, "Admin access granted");

        Ok(RequireAdmin(identity.clone()))
    }
}

/// Role check over the identity attached by authentication
pub fn authorize_admin(identity: Option<&Identity>) -> Result<&Identity, ApiError> {
    let identity = identity.ok_or_else(|| ApiError::unauthorized("invalid user"))?;

    if !identity.is_admin() {
        return Err(ApiError::forbidden("access denied"));
    }

    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, UserId};
    use axum::http::StatusCode;

    #[test]
    fn test_admin_is_allowed() {
        let identity = Identity::new(UserId::new(1), "root", Role::admin());

        let allowed = authorize_admin(Some(&identity)).unwrap();
        assert_eq!(allowed.id, UserId::new(1));
    }

    #[test]
    fn test_missing_identity_is_unauthorized() {
        let err = authorize_admin(None).unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "invalid user");
    }

    #[test]
    fn test_other_roles_are_forbidden() {
        for role in ["", "user", "Admin", "admin "] {
            let identity = Identity::new(UserId::new(2), "alice", Role::new(role));

            let err = authorize_admin(Some(&identity)).unwrap_err();
            assert_eq!(err.status, StatusCode::FORBIDDEN);
            assert_eq!(err.message(), "access denied");
        }
    }
}
