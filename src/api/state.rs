//! Application state for shared services

use std::sync::Arc;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::team::{CreateTeamRequest, TeamService};
use crate::infrastructure::user::{SignupRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn signup(&self, request: SignupRequest) -> Result<User, DomainError>;
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<Option<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError>;
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;
    async fn members(&self, id: TeamId) -> Result<Vec<User>, DomainError>;
    async fn rename(&self, id: TeamId, name: &str) -> Result<Team, DomainError>;
    async fn add_member(&self, team_id: TeamId, user_id: UserId) -> Result<User, DomainError>;
    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> Result<User, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static, T: TeamRepository + 'static> UserServiceTrait
    for UserService<R, T>
{
    async fn signup(&self, request: SignupRequest) -> Result<User, DomainError> {
        UserService::signup(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}

#[async_trait::async_trait]
impl<T: TeamRepository + 'static, U: UserRepository + 'static> TeamServiceTrait
    for TeamService<T, U>
{
    async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        TeamService::create(self, request).await
    }

    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        TeamService::get(self, id).await
    }

    async fn members(&self, id: TeamId) -> Result<Vec<User>, DomainError> {
        TeamService::members(self, id).await
    }

    async fn rename(&self, id: TeamId, name: &str) -> Result<Team, DomainError> {
        TeamService::rename(self, id, name).await
    }

    async fn add_member(&self, team_id: TeamId, user_id: UserId) -> Result<User, DomainError> {
        TeamService::add_member(self, team_id, user_id).await
    }

    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> Result<User, DomainError> {
        TeamService::remove_member(self, team_id, user_id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        TeamService::count(self).await
    }
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        team_service: Arc<dyn TeamServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            user_service,
            team_service,
            jwt_service,
        }
    }
}
