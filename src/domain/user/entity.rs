//! User entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::identity::Role;
use crate::domain::team::TeamId;

/// Numeric user identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a path segment. Anything but a positive integer yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().filter(|id| *id > 0).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record
///
/// `password` holds whatever the configured password scheme stores:
/// the raw password for `plaintext`, a PHC string for `argon2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    password: String,
    role: Role,
    team_id: Option<TeamId>,
}

impl User {
    /// Create a user with no role and no team
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            role: Role::default(),
            team_id: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_team(mut self, team_id: Option<TeamId>) -> Self {
        self.team_id = team_id;
        self
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    // Mutators

    /// Point the user at a team
    pub fn assign_team(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
    }

    /// Leave whatever team the user is in
    pub fn clear_team(&mut self) {
        self.team_id = None;
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub team_id: Option<TeamId>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: Role::default(),
            team_id: None,
        }
    }

    /// Attach the store-assigned identifier
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.username, self.password)
            .with_role(self.role)
            .with_team(self.team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("42"), Some(UserId::new(42)));
        assert_eq!(UserId::parse("0"), None);
        assert_eq!(UserId::parse("-3"), None);
        assert_eq!(UserId::parse("abc"), None);
        assert_eq!(UserId::parse(""), None);
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(UserId::new(1), "alice", "p1");

        assert_eq!(user.username(), "alice");
        assert_eq!(user.password(), "p1");
        assert!(user.role().is_empty());
        assert!(!user.is_admin());
        assert!(user.team_id().is_none());
    }

    #[test]
    fn test_assign_and_clear_team() {
        let mut user = User::new(UserId::new(1), "alice", "p1");

        user.assign_team(TeamId::new(3));
        assert_eq!(user.team_id(), Some(TeamId::new(3)));

        user.clear_team();
        assert!(user.team_id().is_none());

        user.clear_team();
        assert!(user.team_id().is_none());
    }

    #[test]
    fn test_into_user_keeps_fields() {
        let mut new_user = NewUser::new("bob", "secret");
        new_user.role = Role::admin();
        new_user.team_id = Some(TeamId::new(2));

        let user = new_user.into_user(UserId::new(9));

        assert_eq!(user.id(), UserId::new(9));
        assert!(user.is_admin());
        assert_eq!(user.team_id(), Some(TeamId::new(2)));
    }
}
