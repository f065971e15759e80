//! Team endpoints

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, JsonRejection, TeamResponse, UserResponse};
use crate::domain::team::TeamId;
use crate::domain::user::UserId;
use crate::infrastructure::team::CreateTeamRequest;

/// Create the team router
pub fn create_team_router() -> Router<AppState> {
    Router::new()
        .route("/team", post(create_team))
        .route("/team/{team_id}", get(get_team).patch(update_team))
        .route(
            "/team/{team_id}/user/{user_id}",
            post(add_user_to_team).delete(remove_user_from_team),
        )
}

#[derive(Debug, Deserialize)]
pub struct TeamBody {
    #[serde(default)]
    pub name: String,
}

/// Path ids that are not positive integers can never match a record
fn team_id(raw: &str) -> Result<TeamId, ApiError> {
    TeamId::parse(raw).ok_or_else(|| ApiError::not_found("team not found"))
}

fn user_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::parse(raw).ok_or_else(|| ApiError::not_found("user not found"))
}

/// POST /team
pub async fn create_team(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<TeamBody>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service
        .create(CreateTeamRequest { name: body.name })
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to create team"))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// GET /team/{team_id}
///
/// Returns the members of the team, not the team itself.
pub async fn get_team(
    State(state): State<AppState>,
    Path(raw_team_id): Path<String>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let team_id = team_id(&raw_team_id)?;

    let members = state
        .team_service
        .members(team_id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to fetch users"))?;

    Ok(Json(members.iter().map(UserResponse::from).collect()))
}

/// PATCH /team/{team_id}
///
/// The team must exist before the body is looked at.
pub async fn update_team(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(raw_team_id): Path<String>,
    body: Result<Json<TeamBody>, JsonRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_id = team_id(&raw_team_id)?;

    state
        .team_service
        .get(team_id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to fetch team"))?
        .ok_or_else(|| ApiError::not_found("team not found"))?;

    let Json(body) = body.map_err(|_| ApiError::bad_request("invalid data"))?;

    let team = state
        .team_service
        .rename(team_id, &body.name)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to update team"))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// POST /team/{team_id}/user/{user_id}
pub async fn add_user_to_team(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((raw_team_id, raw_user_id)): Path<(String, String)>,
) -> Result<Json<UserResponse>, ApiError> {
    let team_id = team_id(&raw_team_id)?;

    // Team is checked before the user even when the user id is malformed
    let user_id = match user_id(&raw_user_id) {
        Ok(id) => id,
        Err(err) => {
            require_team(&state, team_id).await?;
            return Err(err);
        }
    };

    let user = state
        .team_service
        .add_member(team_id, user_id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to add user to team"))?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /team/{team_id}/user/{user_id}
pub async fn remove_user_from_team(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((raw_team_id, raw_user_id)): Path<(String, String)>,
) -> Result<Json<UserResponse>, ApiError> {
    let team_id = team_id(&raw_team_id)?;

    let user_id = match user_id(&raw_user_id) {
        Ok(id) => id,
        Err(err) => {
            require_team(&state, team_id).await?;
            return Err(err);
        }
    };

    let user = state
        .team_service
        .remove_member(team_id, user_id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to remove user from team"))?;

    Ok(Json(UserResponse::from(&user)))
}

async fn require_team(state: &AppState, id: TeamId) -> Result<(), ApiError> {
    state
        .team_service
        .get(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to fetch team"))?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("team not found"))
}
