//! User service for signup and credential verification

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::team::{TeamId, TeamRepository};
use crate::domain::user::{validate_password, validate_username, NewUser, User, UserRepository};
use crate::domain::{DomainError, Role};

use super::password::PasswordHasher;

/// Request for creating a new user through signup
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    /// Client-supplied role, honored only when privileged signup is enabled
    pub role: Option<String>,
    /// Client-supplied team reference, honored only when privileged signup is enabled
    pub team_id: Option<i64>,
}

impl SignupRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    fn has_privileged_fields(&self) -> bool {
        self.role.as_deref().is_some_and(|r| !r.is_empty())
            || self.team_id.is_some_and(|t| t != 0)
    }
}

/// User service for signup and authentication
#[derive(Debug)]
pub struct UserService<R: UserRepository, T: TeamRepository> {
    repository: Arc<R>,
    teams: Arc<T>,
    hasher: Arc<dyn PasswordHasher>,
    allow_privileged_fields: bool,
}

impl<R: UserRepository, T: TeamRepository> UserService<R, T> {
    /// Create a new user service. Signup ignores client-supplied role and team.
    pub fn new(repository: Arc<R>, teams: Arc<T>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            teams,
            hasher,
            allow_privileged_fields: false,
        }
    }

    /// Let signup persist client-supplied role and team fields as given
    pub fn with_privileged_signup(mut self, allow: bool) -> Self {
        self.allow_privileged_fields = allow;
        self
    }

    /// Register a new user.
    ///
    /// With privileged signup, a positive team reference must name an
    /// existing team. Zero and negative references mean unassigned.
    pub async fn signup(&self, request: SignupRequest) -> Result<User, DomainError> {
        validate_username(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut new_user = NewUser::new(&request.username, self.hasher.hash(&request.password)?);

        if self.allow_privileged_fields {
            let team_id = request.team_id.filter(|id| *id > 0).map(TeamId::new);
            if let Some(team_id) = team_id {
                if !self.teams.exists(team_id).await? {
                    return Err(DomainError::validation("team not found"));
                }
            }

            new_user.role = Role::new(request.role.clone().unwrap_or_default());
            new_user.team_id = team_id;
        } else if request.has_privileged_fields() {
            warn!(username = %request.username, "Ignoring role/team supplied at signup");
        }

        let user = self.repository.create(new_user).await?;

        info!(user_id = %user.id(), username = %user.username(), "User signed up");

        Ok(user)
    }

    /// Check a username/password pair.
    ///
    /// Returns `None` both for an unknown username and for a wrong password.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.get_by_username(username).await? {
            Some(u) => u,
            None => {
                debug!(username = %username, "Login for unknown username");
                return Ok(None);
            }
        };

        if !self.hasher.verify(password, user.password()) {
            debug!(user_id = %user.id(), "Login with wrong password");
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
