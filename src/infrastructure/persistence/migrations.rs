//! Schema migrations
//!
//! SQL files under `migrations/` are embedded at compile time and applied
//! in version order. Applied versions are tracked in `_sqlx_migrations`.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies every pending migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or(0);
    info!(latest_version = latest, "applying database migrations");
    MIGRATOR.run(pool).await?;
    info!("database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_embedded() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert_eq!(versions.first(), Some(&1));
        assert!(MIGRATOR
            .iter()
            .any(|m| m.sql.contains("CREATE TABLE category")));
    }
}
