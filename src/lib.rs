//! Teamgate
//!
//! User and team management over HTTP:
//! - signup and login with bearer tokens (HS256 JWT)
//! - an auth gate with an admin role check
//! - team creation, rename and membership
//! - in-memory or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::{info, warn};

use api::state::AppState;
use domain::team::TeamRepository;
use domain::user::UserRepository;
use infrastructure::{
    auth::{JwtConfig, JwtService},
    storage::{connect_pool, PostgresMigrator, StorageType},
    team::{InMemoryTeamRepository, PostgresTeamRepository, TeamService},
    user::{InMemoryUserRepository, PostgresUserRepository, UserService},
};

/// Create the application state for the configured storage backend.
///
/// The postgres backend connects and applies pending migrations first.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.auth.uses_default_secret() {
        warn!(
            "Signing tokens with the default secret. \
            Set APP_AUTH__SECRET before exposing this service."
        );
    }

    info!("Storage backend: {:?}", config.storage.backend);

    let state = match config.storage.backend {
        StorageType::InMemory => build_app_state(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTeamRepository::new()),
            config,
        ),
        StorageType::Postgres => {
            let pool = connect_postgres(config).await?;

            let applied = PostgresMigrator::new(pool.clone()).run_all().await?;
            info!(applied, "Database migrations complete");

            build_app_state(
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresTeamRepository::new(pool)),
                config,
            )
        }
    };

    Ok(state)
}

/// Wire services over the given repositories
pub fn build_app_state<U, T>(users: Arc<U>, teams: Arc<T>, config: &AppConfig) -> AppState
where
    U: UserRepository + 'static,
    T: TeamRepository + 'static,
{
    let hasher = config.auth.password_scheme.hasher();

    let user_service = UserService::new(users.clone(), teams.clone(), hasher)
        .with_privileged_signup(config.signup.allow_privileged_fields);
    let team_service = TeamService::new(teams, users);
    let jwt_service = JwtService::new(JwtConfig::new(
        config.auth.secret.clone(),
        config.auth.expiration_hours,
    ));

    AppState::new(
        Arc::new(user_service),
        Arc::new(team_service),
        Arc::new(jwt_service),
    )
}

/// Open the PostgreSQL pool described by the storage section
pub async fn connect_postgres(config: &AppConfig) -> anyhow::Result<PgPool> {
    let url = config
        .storage
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("storage.database_url is required for the postgres backend"))?;

    Ok(connect_pool(url, config.storage.max_connections).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_state() {
        let state = create_app_state_with_config(&AppConfig::default()).await.unwrap();

        assert_eq!(state.user_service.count().await.unwrap(), 0);
        assert_eq!(state.team_service.count().await.unwrap(), 0);
        assert_eq!(state.jwt_service.expiration_hours(), None);
    }

    #[tokio::test]
    async fn test_postgres_requires_database_url() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageType::Postgres;

        let err = create_app_state_with_config(&config).await.unwrap_err();
        assert!(err.to_string().contains("database_url"));
    }
}
