//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Persist a new team with the given name, assigning its ID
    async fn create(&self, name: &str) -> Result<Team, DomainError>;

    /// Save an existing team
    async fn update(&self, team: &Team) -> Result<Team, DomainError>;

    /// Count all teams
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::RwLock;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockTeamRepository {
        teams: RwLock<Vec<Team>>,
        should_fail: RwLock<bool>,
    }

    impl MockTeamRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().unwrap() = fail;
        }

        fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().unwrap() {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
            self.check_should_fail()?;
            let teams = self.teams.read().unwrap();
            Ok(teams.iter().find(|t| t.id() == id).cloned())
        }

        async fn create(&self, name: &str) -> Result<Team, DomainError> {
            self.check_should_fail()?;
            let mut teams = self.teams.write().unwrap();
            let id = TeamId::new(teams.len() as i64 + 1);
            let team = Team::new(id, name).map_err(|e| DomainError::validation(e.to_string()))?;
            teams.push(team.clone());
            Ok(team)
        }

        async fn update(&self, team: &Team) -> Result<Team, DomainError> {
            self.check_should_fail()?;
            let mut teams = self.teams.write().unwrap();
            let slot = teams
                .iter_mut()
                .find(|t| t.id() == team.id())
                .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", team.id())))?;
            *slot = team.clone();
            Ok(team.clone())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_should_fail()?;
            Ok(self.teams.read().unwrap().len())
        }
    }
}
