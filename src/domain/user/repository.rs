//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get the first user (lowest ID) with an exactly matching username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user, assigning its ID
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Save an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// List users whose team reference equals `team_id`, ordered by ID
    async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<Vec<User>>>,
        should_fail: Arc<RwLock<bool>>,
        fail_updates: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether every operation should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Set whether only `update` should fail
        pub async fn set_fail_updates(&self, fail: bool) {
            *self.fail_updates.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.iter().find(|u| u.id() == id).cloned())
        }

        async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.iter().find(|u| u.username() == username).cloned())
        }

        async fn create(&self, user: NewUser) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let id = UserId::new(users.len() as i64 + 1);
            let user = user.into_user(id);
            users.push(user.clone());
            Ok(user)
        }

        async fn update(&self, user: &User) -> Result<User, DomainError> {
            self.check_should_fail().await?;

            if *self.fail_updates.read().await {
                return Err(DomainError::storage("Mock repository configured to fail updates"));
            }

            let mut users = self.users.write().await;
            let slot = users
                .iter_mut()
                .find(|u| u.id() == user.id())
                .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user.id())))?;
            *slot = user.clone();
            Ok(user.clone())
        }

        async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users
                .iter()
                .filter(|u| u.team_id() == Some(team_id))
                .cloned()
                .collect())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            Ok(self.users.read().await.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_create_assigns_sequential_ids() {
            let repo = MockUserRepository::new();

            let first = repo.create(NewUser::new("alice", "p1")).await.unwrap();
            let second = repo.create(NewUser::new("bob", "p2")).await.unwrap();

            assert_eq!(first.id(), UserId::new(1));
            assert_eq!(second.id(), UserId::new(2));
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.create(NewUser::new("alice", "p1")).await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }

        #[tokio::test]
        async fn test_fail_updates_only() {
            let repo = MockUserRepository::new();
            let user = repo.create(NewUser::new("alice", "p1")).await.unwrap();
            repo.set_fail_updates(true).await;

            assert!(repo.get(user.id()).await.unwrap().is_some());
            assert!(repo.update(&user).await.is_err());
        }
    }
}
