//! Wire representations of users, teams and tokens

use serde::{Deserialize, Serialize};

use crate::domain::team::Team;
use crate::domain::user::User;

/// User as returned to clients. The password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
    /// `0` when the user is not assigned to a team
    pub teamid: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
            role: user.role().as_str().to_string(),
            teamid: user.team_id().map(|t| t.value()).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamId;
    use crate::domain::user::UserId;
    use crate::domain::Role;

    #[test]
    fn test_user_response_hides_password() {
        let user = User::new(UserId::new(1), "alice", "p1");

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "alice", "role": "", "teamid": 0})
        );
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_user_response_with_team_and_role() {
        let user = User::new(UserId::new(2), "root", "x")
            .with_role(Role::admin())
            .with_team(Some(TeamId::new(3)));

        let response = UserResponse::from(&user);

        assert_eq!(response.role, "admin");
        assert_eq!(response.teamid, 3);
    }

    #[test]
    fn test_team_response() {
        let team = Team::new(TeamId::new(1), "Platform").unwrap();

        let json = serde_json::to_value(TeamResponse::from(&team)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Platform"}));
    }
}
