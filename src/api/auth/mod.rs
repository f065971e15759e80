//! Signup and login endpoints

use axum::{extract::State, routing::post, Router};
use serde::Deserialize;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, TokenResponse, UserResponse};
use crate::domain::Identity;
use crate::infrastructure::user::SignupRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Signup body. `role` and `teamid` are only kept when privileged signup
/// is enabled.
#[derive(Debug, Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub teamid: Option<i64>,
}

/// Login body
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = SignupRequest {
        username: body.username,
        password: body.password,
        role: body.role,
        team_id: body.teamid,
    };

    let user = state
        .user_service
        .signup(request)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to create user"))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /login
///
/// Unknown usernames and wrong passwords get the same response.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to fetch user"))?
        .ok_or_else(|| {
            debug!(username = %body.username, "Login rejected");
            ApiError::unauthorized("invalid credentials")
        })?;

    let token = state
        .jwt_service
        .generate(&Identity::from(&user))
        .map_err(|e| ApiError::from_domain(e, "failed to generate token"))?;

    info!(user_id = %user.id(), "User logged in");

    Ok(Json(TokenResponse { token }))
}
