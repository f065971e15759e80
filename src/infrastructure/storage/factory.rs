//! Runtime storage backend selection

use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::domain::DomainError;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum StorageType {
    /// In-memory storage, lost on restart
    #[default]
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

impl TryFrom<String> for StorageType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown storage backend '{}'", value))
    }
}

/// Open a PostgreSQL connection pool
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<PgPool, DomainError> {
    info!(max_connections, "Connecting to PostgreSQL");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

    info!("PostgreSQL connection established");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_parse() {
        assert_eq!(StorageType::parse("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::parse("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::parse("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::parse("PG"), Some(StorageType::Postgres));
        assert_eq!(StorageType::parse("sqlite"), None);
    }

    #[test]
    fn test_storage_type_deserialize() {
        let backend: StorageType = serde_json::from_str("\"postgresql\"").unwrap();
        assert_eq!(backend, StorageType::Postgres);

        let result: Result<StorageType, _> = serde_json::from_str("\"mongo\"");
        assert!(result.is_err());

        assert_eq!(StorageType::default(), StorageType::InMemory);
    }
}
