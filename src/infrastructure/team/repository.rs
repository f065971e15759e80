//! In-memory team repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<BTreeMap<TeamId, Team>>>,
    next_id: AtomicI64,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            teams: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(&id).cloned())
    }

    async fn create(&self, name: &str) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        let id = TeamId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let team = Team::new(id, name).map_err(|e| DomainError::validation(e.to_string()))?;

        teams.insert(id, team.clone());
        Ok(team)
    }

    async fn update(&self, team: &Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        match teams.get_mut(&team.id()) {
            Some(existing) => {
                *existing = team.clone();
                Ok(team.clone())
            }
            None => Err(DomainError::not_found(format!(
                "Team '{}' not found",
                team.id()
            ))),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.teams.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryTeamRepository::new();

        let team = repo.create("Platform").await.unwrap();
        assert_eq!(team.id(), TeamId::new(1));

        let retrieved = repo.get(team.id()).await.unwrap();
        assert_eq!(retrieved, Some(team));
    }

    #[tokio::test]
    async fn test_duplicate_names_allowed() {
        let repo = InMemoryTeamRepository::new();

        let first = repo.create("Platform").await.unwrap();
        let second = repo.create("Platform").await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let repo = InMemoryTeamRepository::new();

        let result = repo.create("").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryTeamRepository::new();
        let mut team = repo.create("Platform").await.unwrap();

        team.rename("Infra").unwrap();
        repo.update(&team).await.unwrap();

        let retrieved = repo.get(team.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.name(), "Infra");
    }

    #[tokio::test]
    async fn test_update_missing_team() {
        let repo = InMemoryTeamRepository::new();
        let ghost = Team::new(TeamId::new(9), "Ghost").unwrap();

        let result = repo.update(&ghost).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = InMemoryTeamRepository::new();
        let team = repo.create("Platform").await.unwrap();

        assert!(repo.exists(team.id()).await.unwrap());
        assert!(!repo.exists(TeamId::new(42)).await.unwrap());
    }
}
