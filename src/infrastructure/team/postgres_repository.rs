//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM teams WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        row.as_ref().map(row_to_team).transpose()
    }

    async fn create(&self, name: &str) -> Result<Team, DomainError> {
        // Reject before touching the database so no row is written
        crate::domain::team::validate_team_name(name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let id: i64 = sqlx::query_scalar("INSERT INTO teams (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        Team::new(TeamId::new(id), name).map_err(|e| DomainError::validation(e.to_string()))
    }

    async fn update(&self, team: &Team) -> Result<Team, DomainError> {
        let result = sqlx::query("UPDATE teams SET name = $2 WHERE id = $1")
            .bind(team.id().value())
            .bind(team.name())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update team: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                team.id()
            )));
        }

        Ok(team.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count teams: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_team(row: &sqlx::postgres::PgRow) -> Result<Team, DomainError> {
    let id: i64 = row.get("id");
    let name: String = row.get("name");

    Team::new(TeamId::new(id), name)
        .map_err(|e| DomainError::storage(format!("Corrupt team row {}: {}", id, e)))
}
