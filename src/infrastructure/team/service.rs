//! Team service for team management and membership

use std::sync::Arc;

use tracing::info;

use crate::domain::team::{validate_team_name, Team, TeamId, TeamRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
}

/// Team service for managing teams and their members
#[derive(Debug)]
pub struct TeamService<T: TeamRepository, U: UserRepository> {
    teams: Arc<T>,
    users: Arc<U>,
}

impl<T: TeamRepository, U: UserRepository> TeamService<T, U> {
    /// Create a new team service
    pub fn new(teams: Arc<T>, users: Arc<U>) -> Self {
        Self { teams, users }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        validate_team_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        let team = self.teams.create(&request.name).await?;

        info!(team_id = %team.id(), name = %team.name(), "Created team");

        Ok(team)
    }

    /// Get a team by ID
    pub async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        self.teams.get(id).await
    }

    /// Users whose team reference equals the team, ordered by user ID
    pub async fn members(&self, id: TeamId) -> Result<Vec<User>, DomainError> {
        self.require_team(id).await?;
        self.users.list_by_team(id).await
    }

    /// Replace a team's name
    pub async fn rename(&self, id: TeamId, name: &str) -> Result<Team, DomainError> {
        let mut team = self.require_team(id).await?;

        team.rename(name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let team = self.teams.update(&team).await?;

        info!(team_id = %team.id(), name = %team.name(), "Renamed team");

        Ok(team)
    }

    /// Point a user's team reference at the team, replacing any previous one
    pub async fn add_member(&self, team_id: TeamId, user_id: UserId) -> Result<User, DomainError> {
        self.require_team(team_id).await?;
        let mut user = self.require_user(user_id).await?;

        user.assign_team(team_id);
        let user = self.users.update(&user).await?;

        info!(team_id = %team_id, user_id = %user_id, "Added user to team");

        Ok(user)
    }

    /// Clear a user's team reference.
    ///
    /// The reference is cleared whatever team it pointed at, so removing a
    /// user that is not a member still succeeds.
    pub async fn remove_member(
        &self,
        team_id: TeamId,
        user_id: UserId,
    ) -> Result<User, DomainError> {
        self.require_team(team_id).await?;
        let mut user = self.require_user(user_id).await?;

        user.clear_team();
        let user = self.users.update(&user).await?;

        info!(team_id = %team_id, user_id = %user_id, "Removed user from team");

        Ok(user)
    }

    /// Count teams
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.teams.count().await
    }

    async fn require_team(&self, id: TeamId) -> Result<Team, DomainError> {
        self.teams
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("team not found"))
    }

    async fn require_user(&self, id: UserId) -> Result<User, DomainError> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))
    }
}
