//! Migrate command - applies PostgreSQL migrations and exits

use tracing::{info, warn};

use crate::infrastructure::storage::{PostgresMigrator, StorageType};

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    if config.storage.backend != StorageType::Postgres {
        warn!(
            backend = ?config.storage.backend,
            "Storage backend is not postgres; applying migrations to storage.database_url anyway"
        );
    }

    let pool = crate::connect_postgres(&config).await?;
    let migrator = PostgresMigrator::new(pool);

    let applied = migrator.run_all().await?;
    let version = migrator.current_version().await?;

    info!(applied, version = ?version, "Migrations complete");

    Ok(())
}
