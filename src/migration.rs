//! Startup schema migrations: ordered forward-only SQL files embedded from
//! `migrations/`, applied before the service accepts requests. Applied state
//! is tracked in sqlx's metadata table, so a restart with nothing pending is
//! a no-op rather than an error.

use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all not-yet-applied migrations in ascending order. Any failure must
/// abort startup; the schema is never left partially migrated behind a
/// serving process.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "schema migrations applied");
    Ok(())
}
